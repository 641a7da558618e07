pub mod targets {
    pub const ANALYSIS: &str = "analysis";
    pub const BACKJUMP: &str = "backjump";
    pub const BUILD: &str = "build";
    pub const DECIDE: &str = "decide";
    pub const PROPAGATION: &str = "propagation";
    pub const RESTART: &str = "restart";
}
