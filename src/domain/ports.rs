use crate::domain::model::OutputFormat;

/// Resolved settings consumed by the center and the menu front end.
pub trait ConfigProvider {
    fn center_name(&self) -> &str;
    /// A customer becomes frequent once their request count exceeds this value.
    fn frequent_threshold(&self) -> u32;
    fn output_format(&self) -> OutputFormat;
    fn pause_after_action(&self) -> bool;
}
