/// Diagnostic output port used by the application layer.
///
/// Extraction failures are only ever reported through this port; clients
/// receive a generic error body.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
