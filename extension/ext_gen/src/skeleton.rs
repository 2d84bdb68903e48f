//! Variant Skeleton
//!
//! The shared shape of the factory-like artifacts, instantiated once per
//! arity. Each block declares:
//!
//! - `generic_factory_function`: the abstract call operation plus `copy()`
//! - `factory_function<T>`: binds construction of `T` and forwards the
//!   arity's arguments to it
//! - the owning handle itself, which holds exactly one behaviour, copies it
//!   through `copy()`, and exposes `create`/`operator()`/`get_info`
//!
//! Variants differ only by the [`SkeletonFragments`] injected into the
//! skeleton: the counted factory adds a leading counter argument, a product
//! wrapper that adjusts the counter over its lifetime, and library tagging.

use crate::arity::{emit_blocks, Arity, ArityOrder};
use crate::artifact::Artifact;
use crate::config::GeneratorConfig;
use crate::context::EmitContext;
use crate::frame::{self, Include};

/// Text injected into the factory skeleton to produce one variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkeletonFragments {
    /// Class template name of the owning handle.
    pub class_name: &'static str,
    /// Fixed leading parameters of the behaviour's call operation.
    pub call_prefix: &'static [&'static str],
    /// Arguments `create` passes ahead of the forwarded values.
    pub create_prefix: &'static [&'static str],
    /// Wrapper class the behaviour constructs instead of `T`.
    pub product: Option<ProductFragment>,
    /// Extra protected data members.
    pub data_members: &'static [&'static str],
    /// Extra public operations.
    pub public_members: &'static [&'static str],
    /// Extra initializers of the `Info` constructor.
    pub ctor_initializers: &'static [&'static str],
    /// Extra initializers of the copy constructor.
    pub copy_initializers: &'static [&'static str],
}

/// A wrapper deriving from `T` that runs side effects around `T`'s lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductFragment {
    pub class_name: &'static str,
    /// Leading constructor parameters ahead of `T`'s own arguments.
    pub ctor_prefix: &'static [&'static str],
    /// Names passed for `ctor_prefix` at the construction site.
    pub ctor_args: &'static [&'static str],
    pub members: &'static [&'static str],
    pub initializers: &'static [&'static str],
    pub on_construct: &'static [&'static str],
    pub on_destroy: &'static [&'static str],
}

/// Plain factory: no extra members.
pub const PLAIN_FACTORY: SkeletonFragments = SkeletonFragments {
    class_name: "factory",
    call_prefix: &[],
    create_prefix: &[],
    product: None,
    data_members: &[],
    public_members: &[],
    ctor_initializers: &[],
    copy_initializers: &[],
};

/// Counted factory: counter-adjusting products and library tagging.
pub const COUNTED_FACTORY: SkeletonFragments = SkeletonFragments {
    class_name: "counted_factory",
    call_prefix: &["int * counter"],
    create_prefix: &["counter_"],
    product: Some(ProductFragment {
        class_name: "counted_object",
        ctor_prefix: &["int * counter"],
        ctor_args: &["counter"],
        members: &["int * counter_;"],
        initializers: &["counter_(counter)"],
        on_construct: &["++(*counter_);"],
        on_destroy: &["--(*counter_);"],
    }),
    data_members: &["int * counter_;", "std::string library_;"],
    public_members: &[
        "void set_library(const char * library_name)",
        "{",
        "    library_ = library_name;",
        "}",
        "void set_counter(int * counter)",
        "{",
        "    counter_ = counter;",
        "}",
        "const char * library() const",
        "{",
        "    return library_.c_str();",
        "}",
    ],
    ctor_initializers: &["counter_(0)", "library_()"],
    copy_initializers: &["counter_(first.counter_)", "library_(first.library_)"],
};

impl SkeletonFragments {
    /// Fragments of the given artifact, if it is factory-like.
    pub fn for_artifact(artifact: Artifact) -> Option<&'static SkeletonFragments> {
        match artifact {
            Artifact::Factory => Some(&PLAIN_FACTORY),
            Artifact::CountedFactory => Some(&COUNTED_FACTORY),
            Artifact::SharedLibrary | Artifact::FactoryMap | Artifact::CountedFactoryMap => None,
        }
    }
}

/// Render the complete header of a factory-like artifact.
pub fn render_header(
    config: &GeneratorConfig,
    artifact: Artifact,
    fragments: &SkeletonFragments,
) -> String {
    let mut ctx = EmitContext::new();
    frame::open(
        &mut ctx,
        config,
        artifact,
        &[
            Include::System("memory"),
            Include::System("stdexcept"),
            Include::System("string"),
        ],
    );
    emit_unbound_error(&mut ctx, config);

    let mut out = ctx.take_output();
    out.push_str(&emit_blocks(
        config.max_params,
        ArityOrder::Descending,
        |arity| render_block(fragments, arity),
    ));

    frame::close(&mut ctx, config, artifact);
    out.push_str(&ctx.take_output());
    out
}

/// Declare the error thrown when a handle has no bound behaviour.
///
/// Both factory headers declare it, so it carries its own guard.
fn emit_unbound_error(ctx: &mut EmitContext, config: &GeneratorConfig) {
    let guard = format!("{}UNBOUND_FACTORY_DEFINED", config.guard_prefix());
    ctx.writeln(&format!("#ifndef {guard}"));
    ctx.writeln(&format!("#define {guard}"));
    ctx.writeln("class unbound_factory : public std::logic_error");
    ctx.block("{", "};", |ctx| {
        ctx.access("public:");
        ctx.writeln("explicit unbound_factory(const char * operation)");
        ctx.writeln("  : std::logic_error(std::string(\"factory has no bound behavior: \") + operation)");
        ctx.writeln("{}");
    });
    ctx.writeln("#endif");
    ctx.newline();
}

/// Render the block of one arity.
pub fn render_block(fragments: &SkeletonFragments, arity: Arity) -> String {
    let mut ctx = EmitContext::new();
    let class = fragments.class_name;
    let values = arity.params(&[]);
    let call = arity.params(fragments.call_prefix);

    let header = arity
        .params(&["class Interface", "class Info"])
        .header(arity.is_max());
    ctx.writeln(&format!("template <{header}>"));
    if arity.is_max() {
        ctx.writeln(&format!("class {class}"));
    } else {
        let args = arity.params(&["Interface", "Info"]).types();
        ctx.writeln(&format!("class {class}<{args}>"));
    }

    ctx.block("{", "};", |ctx| {
        ctx.access("protected:");
        ctx.writeln("class generic_factory_function");
        ctx.block("{", "};", |ctx| {
            ctx.access("public:");
            ctx.writeln("virtual ~generic_factory_function() {}");
            ctx.writeln(&format!(
                "virtual Interface * operator()({}) = 0;",
                call.types()
            ));
            ctx.writeln("virtual generic_factory_function * copy() const = 0;");
        });

        ctx.writeln("template <class T>");
        ctx.writeln("class factory_function : public generic_factory_function");
        ctx.block("{", "};", |ctx| {
            ctx.access("public:");
            if let Some(product) = &fragments.product {
                emit_product(ctx, product, arity);
            }
            ctx.writeln("virtual ~factory_function() {}");
            ctx.writeln(&format!(
                "virtual Interface * operator()({})",
                call.declarations()
            ));
            ctx.block("{", "}", |ctx| {
                ctx.writeln(&format!("return {};", construction(fragments, arity)));
            });
            ctx.writeln("virtual generic_factory_function * copy() const");
            ctx.block("{", "}", |ctx| {
                ctx.writeln("return new factory_function<T>;");
            });
        });

        ctx.writeln("std::unique_ptr<generic_factory_function> factory_func_ptr_;");
        ctx.writeln("Info info_;");
        ctx.write_lines(fragments.data_members);

        ctx.access("public:");
        ctx.write_lines(fragments.public_members);
        ctx.writeln("template <class Actual>");
        ctx.writeln("void set_type()");
        ctx.block("{", "}", |ctx| {
            ctx.writeln("factory_func_ptr_.reset(new factory_function<Actual>());");
        });

        ctx.writeln(&format!("explicit {class}(Info info)"));
        let mut inits = vec!["factory_func_ptr_()", "info_(info)"];
        inits.extend_from_slice(fragments.ctor_initializers);
        emit_initializers(ctx, &inits);
        ctx.writeln("{}");

        ctx.writeln(&format!("{class}(const {class} & first)"));
        let mut inits = vec![
            "factory_func_ptr_(first.factory_func_ptr_ ? first.factory_func_ptr_->copy() \
             : throw unbound_factory(\"copy\"))",
            "info_(first.info_)",
        ];
        inits.extend_from_slice(fragments.copy_initializers);
        emit_initializers(ctx, &inits);
        ctx.writeln("{}");

        ctx.writeln(&format!("Interface * operator()({})", values.declarations()));
        ctx.block("{", "}", |ctx| {
            ctx.writeln(&format!("return create({});", values.names()));
        });

        ctx.writeln(&format!("Interface * create({})", values.declarations()));
        ctx.block("{", "}", |ctx| {
            ctx.writeln("if (!factory_func_ptr_)");
            ctx.block("{", "}", |ctx| {
                ctx.writeln("throw unbound_factory(\"create\");");
            });
            let forwarded = arity.params(fragments.create_prefix).names();
            ctx.writeln(&format!("return (*factory_func_ptr_)({forwarded});"));
        });

        ctx.writeln("Info & get_info()");
        ctx.block("{", "}", |ctx| {
            ctx.writeln("return info_;");
        });
    });
    ctx.newline();
    ctx.take_output()
}

/// Expression that builds the product for one call.
fn construction(fragments: &SkeletonFragments, arity: Arity) -> String {
    match &fragments.product {
        Some(product) => format!(
            "static_cast<Interface *>(new {}({}))",
            product.class_name,
            arity.params(product.ctor_args).names()
        ),
        None => format!("new T({})", arity.params(&[]).names()),
    }
}

fn emit_product(ctx: &mut EmitContext, product: &ProductFragment, arity: Arity) {
    let name = product.class_name;
    ctx.writeln(&format!("class {name} : public T"));
    ctx.block("{", "};", |ctx| {
        ctx.access("private:");
        ctx.write_lines(product.members);
        ctx.access("public:");
        ctx.writeln(&format!(
            "{name}({})",
            arity.params(product.ctor_prefix).declarations()
        ));
        let base = format!("T({})", arity.params(&[]).names());
        let mut inits = vec![base.as_str()];
        inits.extend_from_slice(product.initializers);
        emit_initializers(ctx, &inits);
        ctx.block("{", "}", |ctx| ctx.write_lines(product.on_construct));
        ctx.writeln(&format!("~{name}()"));
        ctx.block("{", "}", |ctx| ctx.write_lines(product.on_destroy));
    });
}

/// `  : a, b, c` with one initializer per line.
fn emit_initializers(ctx: &mut EmitContext, inits: &[&str]) {
    for (i, init) in inits.iter().enumerate() {
        let lead = if i == 0 { "  : " } else { "    " };
        let tail = if i + 1 < inits.len() { "," } else { "" };
        ctx.writeln(&format!("{lead}{init}{tail}"));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests unwrap on known-present text")]
mod tests;
