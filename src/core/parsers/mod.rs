pub mod expr;
pub mod jsx;

pub use expr::StyleExpr;
pub use jsx::{ParsedModule, ParsedStyleBody, parse_jsx_source, parse_style_body};
