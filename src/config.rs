/// Runtime limits for the decoder.
#[derive(Debug, Clone)]
pub struct Config {
    /// Largest original length a decoded artifact may declare. Checked
    /// against the size header before any output is allocated.
    pub max_output_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_output_len: u32::MAX as usize,
        }
    }
}
