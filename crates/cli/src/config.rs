// crates/cli/src/config.rs
use crate::args::Args;
use crate::options;
pub use bookbot_engine::config::{Config, ConfigBuilder};
use bookbot_engine::options as engine_options;

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        // Convert enums via From impls
        let char_class: engine_options::CharClass = args.char_type.into();
        let sort: engine_options::SortMode = args.sort.into();
        let format: engine_options::ReportFormat = args.format.into();

        ConfigBuilder::default()
            .book_path(args.book_path)
            .char_class(char_class)
            .sort(sort)
            .reverse(args.reverse)
            .trim(args.trim)
            .format(format)
            .top(args.top)
            .build()
            .expect("Failed to build config")
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::CharClass,
    engine_options::CharClass,
    Alpha,
    Alnum,
    Ascii,
    Numeric
);
map_enum!(
    options::SortMode,
    engine_options::SortMode,
    ByCount,
    ByCodepoint
);
map_enum!(
    options::ReportFormat,
    engine_options::ReportFormat,
    Text,
    Json
);
