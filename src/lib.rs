pub mod analyze;
pub mod cli;
pub mod config;
pub mod emit;
pub mod mapping;
pub mod resolve;
pub mod server;
pub mod types;

pub use analyze::parse_module;
pub use mapping::{map_all, map_breakpoint, BreakpointMapping};
pub use resolve::{BreakpointTranslator, FsResolver, ResolveError, SourceResolver};
pub use types::{Directive, DirectiveBinding, ProcedureKind, ProcedureRecord};
