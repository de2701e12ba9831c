/// Number format used when rendering money amounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub code: String,
    pub symbol: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
    pub decimals: usize,
}

impl Currency {
    /// Argentine peso, es-AR grouping
    pub fn argentina() -> Self {
        Self {
            code: "ARS".to_string(),
            symbol: "$".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
            decimals: 2,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::argentina()
    }
}
