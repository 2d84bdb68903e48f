//! Function-wrapper artifact.
//!
//! Emits one `functor` block per arity (descending) wrapping a raw function
//! pointer obtained from a loaded library, followed by the `shared_library`
//! handle with one `get_functor` accessor per arity (ascending).

use crate::arity::{emit_blocks, Arity, ArityOrder};
use crate::artifact::Artifact;
use crate::config::GeneratorConfig;
use crate::context::EmitContext;
use crate::frame::{self, Include};
use crate::params::instantiate;

/// Render the complete `shared_library.hpp` header.
pub fn render_header(config: &GeneratorConfig) -> String {
    let artifact = Artifact::SharedLibrary;
    let mut ctx = EmitContext::new();
    frame::open(
        &mut ctx,
        config,
        artifact,
        &[Include::System("string"), Include::Sibling("impl/library_impl.hpp")],
    );
    let mut out = ctx.take_output();

    out.push_str(&emit_blocks(config.max_params, ArityOrder::Descending, render_functor));
    out.push_str(&render_shared_library(config.max_params));

    frame::close(&mut ctx, config, artifact);
    out.push_str(&ctx.take_output());
    out
}

/// Render the `functor` block of one arity.
pub fn render_functor(arity: Arity) -> String {
    let mut ctx = EmitContext::new();
    let header = arity.params(&["class ReturnValue"]).header(arity.is_max());
    ctx.writeln(&format!("template <{header}>"));
    if arity.is_max() {
        ctx.writeln("class functor");
    } else {
        let args = arity.params(&["ReturnValue"]).types();
        ctx.writeln(&format!("class functor<{args}>"));
    }

    let values = arity.params(&[]);
    ctx.block("{", "};", |ctx| {
        ctx.access("protected:");
        ctx.writeln(&format!(
            "typedef ReturnValue (*FunctionType)({});",
            values.types()
        ));
        ctx.writeln("FunctionType func_;");
        ctx.access("public:");
        ctx.writeln("bool is_valid() const");
        ctx.block("{", "}", |ctx| ctx.writeln("return func_ != 0;"));
        ctx.writeln("functor(FunctionType func)");
        ctx.writeln("  : func_(func)");
        ctx.writeln("{}");
        ctx.writeln("functor(generic_function_ptr func)");
        ctx.writeln("  : func_(FunctionType(func))");
        ctx.writeln("{}");
        ctx.writeln(&format!("ReturnValue operator()({})", values.declarations()));
        ctx.block("{", "}", |ctx| {
            ctx.writeln(&format!("return func_({});", values.names()));
        });
    });
    ctx.newline();
    ctx.take_output()
}

/// Render the `shared_library` handle with one accessor per arity.
pub fn render_shared_library(max_params: usize) -> String {
    let mut ctx = EmitContext::new();
    ctx.writeln("class shared_library");
    ctx.writeln("{");
    ctx.writeln("protected:");
    ctx.indent();
    ctx.writeln("std::string location_;");
    ctx.writeln("library_handle handle_;");
    ctx.writeln("bool auto_close_;");
    ctx.access("public:");
    ctx.writeln("bool is_open() const");
    ctx.block("{", "}", |ctx| ctx.writeln("return handle_ != 0;"));
    ctx.writeln("static bool is_linkable_library(const char * file_name)");
    ctx.block("{", "}", |ctx| ctx.writeln("return is_library(file_name);"));
    ctx.writeln("bool open()");
    ctx.block("{", "}", |ctx| {
        ctx.writeln("return (handle_ = load_shared_library(location_.c_str())) != 0;");
    });
    ctx.writeln("bool close()");
    ctx.block("{", "}", |ctx| {
        ctx.writeln("bool closed = close_shared_library(handle_);");
        ctx.writeln("if (closed)");
        ctx.block("{", "}", |ctx| ctx.writeln("handle_ = 0;"));
        ctx.writeln("return closed;");
    });
    let mut out = ctx.take_output();

    out.push_str(&emit_blocks(max_params, ArityOrder::Ascending, render_accessor));

    ctx.writeln("shared_library(const char * location, bool auto_close = false)");
    ctx.writeln("  : location_(location),");
    ctx.writeln("    handle_(0),");
    ctx.writeln("    auto_close_(auto_close)");
    ctx.writeln("{}");
    ctx.writeln("~shared_library()");
    ctx.block("{", "}", |ctx| {
        ctx.writeln("if (auto_close_ && is_open())");
        ctx.block("{", "}", |ctx| ctx.writeln("close();"));
    });
    ctx.dedent();
    ctx.writeln("};");
    ctx.newline();
    out.push_str(&ctx.take_output());
    out
}

/// Render the `get_functor` accessor of one arity.
///
/// Accessors are member templates, so no arity carries `= void` defaults.
pub fn render_accessor(arity: Arity) -> String {
    let mut ctx = EmitContext::with_indent(1);
    let header = arity.params(&["class ReturnValue"]).header(false);
    let functor = instantiate("functor", &arity.params(&["ReturnValue"]).types());
    ctx.writeln(&format!("template <{header}>"));
    ctx.writeln(&format!("{functor} get_functor(const char * function_name)"));
    ctx.block("{", "}", |ctx| {
        ctx.writeln(&format!(
            "return {functor}(get_function(handle_, function_name));"
        ));
    });
    ctx.take_output()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests unwrap on known-present text")]
mod tests;
