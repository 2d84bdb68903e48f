//! Header framing: license banner, include guard, includes and namespace.

use crate::artifact::Artifact;
use crate::config::GeneratorConfig;
use crate::context::EmitContext;

/// A header dependency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Include {
    /// Standard library header, e.g. `<string>`.
    System(&'static str),
    /// Header under the configured include directory.
    Sibling(&'static str),
}

/// Emit everything that precedes the declarations of `artifact`.
pub fn open(
    ctx: &mut EmitContext,
    config: &GeneratorConfig,
    artifact: Artifact,
    includes: &[Include],
) {
    if config.license_header {
        ctx.writeln("/*");
        ctx.writeln(&format!(
            " * Generated for max_params = {}. Do not edit by hand.",
            config.max_params
        ));
        ctx.writeln(" *");
        ctx.writeln(" * Distributed under the Boost Software License, Version 1.0. (See");
        ctx.writeln(" * accompanying file LICENSE_1_0.txt or copy at");
        ctx.writeln(" * http://www.boost.org/LICENSE_1_0.txt)");
        ctx.writeln(" */");
        ctx.newline();
    }

    let guard = guard_name(config, artifact);
    ctx.writeln(&format!("#ifndef {guard}"));
    ctx.writeln(&format!("#define {guard}"));
    ctx.newline();

    for include in includes {
        match include {
            Include::System(name) => ctx.writeln(&format!("#include <{name}>")),
            Include::Sibling(name) => {
                ctx.writeln(&format!("#include <{}>", config.include_path(name)));
            }
        }
    }
    if !includes.is_empty() {
        ctx.newline();
    }

    for segment in &config.namespace {
        ctx.writeln(&format!("namespace {segment} {{"));
    }
    ctx.newline();
}

/// Emit everything that follows the declarations of `artifact`.
pub fn close(ctx: &mut EmitContext, config: &GeneratorConfig, artifact: Artifact) {
    for segment in config.namespace.iter().rev() {
        ctx.writeln(&format!("}} // namespace {segment}"));
    }
    ctx.newline();
    ctx.writeln(&format!("#endif // {}", guard_name(config, artifact)));
}

/// Include guard macro of `artifact`.
pub fn guard_name(config: &GeneratorConfig, artifact: Artifact) -> String {
    format!("{}{}", config.guard_prefix(), artifact.guard_stem())
}
