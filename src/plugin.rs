use crate::actions::Action;

pub trait Plugin: Send + Sync {
    /// Return actions based on the query string
    fn search(&self, query: &str) -> Vec<Action>;
    /// Name of the plugin
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn capabilities(&self) -> &[&str];
}
