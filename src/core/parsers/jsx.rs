use std::path::Path;

use anyhow::{Result, anyhow};
use swc_common::{BytePos, FileName, GLOBALS, Globals, SourceMap, Span, sync::Lrc};
use swc_ecma_ast::{Expr, Module, ModuleItem, ObjectLit, Stmt};
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A parsed module together with the base position needed to turn spans
/// back into byte offsets of the original text.
pub struct ParsedModule {
    pub module: Module,
    pub source_map: Lrc<SourceMap>,
    start_pos: BytePos,
}

impl ParsedModule {
    /// Byte offset of `pos` within the parsed text.
    pub fn offset(&self, pos: BytePos) -> usize {
        (pos.0 - self.start_pos.0) as usize
    }

    /// Byte range covered by `span`.
    pub fn range(&self, span: Span) -> std::ops::Range<usize> {
        self.offset(span.lo)..self.offset(span.hi)
    }
}

/// Pick the swc syntax for a file name. Plain `.ts` files cannot contain
/// JSX, and enabling it there breaks `<T>value` assertions.
pub fn syntax_for(file_path: &str) -> Syntax {
    let is_plain_ts = Path::new(file_path)
        .extension()
        .is_some_and(|ext| ext == "ts" || ext == "mts" || ext == "cts");
    Syntax::Typescript(TsSyntax {
        tsx: !is_plain_ts,
        ..Default::default()
    })
}

/// Parse JSX/TSX source code string into an AST.
pub fn parse_jsx_source(code: &str, file_path: &str) -> Result<ParsedModule> {
    parse_with(code, file_path, syntax_for(file_path), false)
}

/// A style property list re-parsed on its own as `({ ... })`.
pub struct ParsedStyleBody {
    pub object: ObjectLit,
    pub parsed: ParsedModule,
    /// The wrapped text the spans point into.
    pub wrapped: String,
}

impl ParsedStyleBody {
    /// Source text covered by `span` in the wrapped body.
    pub fn slice(&self, span: Span) -> &str {
        let range = self.parsed.range(span);
        &self.wrapped[range]
    }
}

/// Parse a property list body as an object literal.
///
/// Unlike whole-file parsing this is strict: recovered syntax errors count
/// as failures, and the body must form exactly one object literal.
pub fn parse_style_body(body: &str) -> Result<ParsedStyleBody> {
    let wrapped = format!("({{{}}})", body);
    let syntax = Syntax::Typescript(TsSyntax {
        tsx: true,
        ..Default::default()
    });
    let parsed = parse_with(&wrapped, "style.tsx", syntax, true)?;

    let object = match parsed.module.body.as_slice() {
        [ModuleItem::Stmt(Stmt::Expr(stmt))] => match &*stmt.expr {
            Expr::Paren(paren) => match &*paren.expr {
                Expr::Object(object) => Some(object.clone()),
                _ => None,
            },
            _ => None,
        },
        _ => None,
    }
    .ok_or_else(|| anyhow!("Style body is not a single object literal"))?;

    Ok(ParsedStyleBody {
        object,
        parsed,
        wrapped,
    })
}

fn parse_with(code: &str, file_path: &str, syntax: Syntax, strict: bool) -> Result<ParsedModule> {
    GLOBALS.set(&Globals::new(), || {
        let source_map: Lrc<SourceMap> = Default::default();
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code.to_string());

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e.kind()))?;

        if strict {
            let errors = parser.take_errors();
            if let Some(first) = errors.first() {
                return Err(anyhow!(
                    "Failed to parse {}: {:?}",
                    file_path,
                    first.kind()
                ));
            }
        }

        Ok(ParsedModule {
            module,
            source_map: source_map.clone(),
            start_pos: source_file.start_pos,
        })
    })
}
