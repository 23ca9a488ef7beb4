pub const APP_NAME: &str = "SolarCRM";
pub const APP_TAGLINE: &str = "Sales Management";
