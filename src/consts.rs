pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Layout, chart geometry and file locations, grouped by area.

    // =============================================================================
    // FILE LOCATIONS
    // =============================================================================

    /// Directory under the user's home holding config and log files.
    pub const APP_DIR_NAME: &str = ".social-pulse";

    /// Default config file name inside [`APP_DIR_NAME`].
    pub const CONFIG_FILE_NAME: &str = "config.json";

    /// Default log file name inside [`APP_DIR_NAME`].
    pub const LOG_FILE_NAME: &str = "dashboard.log";

    // =============================================================================
    // EVENT LOOP
    // =============================================================================

    /// How long to wait for input before redrawing (milliseconds).
    pub const DEFAULT_TICK_RATE_MS: u64 = 100;

    // =============================================================================
    // LAYOUT
    // =============================================================================

    /// Terminal width at which grids switch from one column to their wide layout.
    pub const MD_BREAKPOINT_COLS: u16 = 100;

    /// Keys the interactive dashboard responds to.
    pub const KEY_HINTS: &str = "[T] Toggle theme | [Q] Quit";

    /// Layout sizes, in terminal cells
    pub mod layout {
        pub const TITLE_HEIGHT: u16 = 3;
        pub const METRIC_CARD_HEIGHT: u16 = 5;
        pub const FOLLOWER_CARD_HEIGHT: u16 = 6;
        pub const CHART_MIN_HEIGHT: u16 = 12;
        pub const FOOTER_HEIGHT: u16 = 2;
        pub const TOGGLE_WIDTH: u16 = 7;
        pub const TOGGLE_HEIGHT: u16 = 3;
        /// Gap between grid cells
        pub const GRID_GAP: u16 = 1;
    }

    // =============================================================================
    // CHARTS
    // =============================================================================

    pub mod charts {
        /// Column width of each distribution bar.
        pub const BAR_WIDTH: u16 = 9;
        pub const BAR_GAP: u16 = 2;

        /// Inner radius of the ring as a fraction of the outer radius (50 / 80).
        pub const RING_INNER_RATIO: f64 = 50.0 / 80.0;

        /// Terminal cells are roughly twice as tall as they are wide.
        pub const CELL_ASPECT: f64 = 2.0;
    }

    // =============================================================================
    // SNAPSHOT
    // =============================================================================

    pub const SNAPSHOT_DEFAULT_WIDTH: u16 = 120;
    pub const SNAPSHOT_DEFAULT_HEIGHT: u16 = 60;
}
