mod emitters;

pub use emitters::emit_scaffold;

/// One API the scaffolding covers, as produced by spec discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiDescriptor {
    pub api_name: String,
    pub filename: String,
}
