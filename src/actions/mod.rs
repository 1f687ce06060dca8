mod settings;

pub mod showcase;
pub mod stat;

pub mod ids {
    use crate::PLUGIN_ID;

    pub const STAT: &str = const_format::concatcp!(PLUGIN_ID, ".stat");
    pub const SHOWCASE: &str = const_format::concatcp!(PLUGIN_ID, ".showcase");
}
