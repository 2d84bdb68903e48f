//! Type-Indexed Factory Map generator.
//!
//! Emits `basic_<factory>_map<TypeInfo>`: a registry owning one factory
//! container per (interface, info, parameter-list) combination, keyed by a
//! type descriptor and created lazily on first `get`. The same skeleton is
//! instantiated for the plain and counted factories; variant text is
//! injected through [`MapFragments`], whose lines may carry placeholders:
//!
//! | Placeholder | Replaced by |
//! |-------------|-------------|
//! | `{factory}` | factory class name (`factory`, `counted_factory`) |
//! | `{map}` | map class name (`basic_factory_map`, ...) |
//! | `{list}` | the container's base list type at maximum arity |

use crate::arity::{emit_blocks, Arity, ArityOrder};
use crate::artifact::Artifact;
use crate::config::GeneratorConfig;
use crate::context::EmitContext;
use crate::frame::{self, Include};
use crate::params::ParamList;

/// Variant text injected into the factory-map skeleton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapFragments {
    /// Factory class stored in the containers.
    pub factory_type: &'static str,
    /// Header declaring the factory class.
    pub factory_header: &'static str,
    /// Extra operations of the erased container base.
    pub base_members: &'static [&'static str],
    /// Body of the typed container.
    pub container_contents: &'static [&'static str],
    /// Extra protected data members of the map.
    pub data_members: &'static [&'static str],
    /// Extra public members of the map (constructors, setters).
    pub public_members: &'static [&'static str],
    /// Arguments passed when constructing a new container.
    pub container_args: &'static str,
    /// Statements applied to a new factory before it is appended.
    pub pre_insertion: &'static [&'static str],
    /// Extra standard headers.
    pub extra_includes: &'static [&'static str],
}

/// Map of plain factories.
pub const PLAIN_MAP: MapFragments = MapFragments {
    factory_type: "factory",
    factory_header: "factory.hpp",
    base_members: &[],
    container_contents: &["factory_container() {}", "virtual ~factory_container() {}"],
    data_members: &[],
    public_members: &["{map}() {}"],
    container_args: "",
    pre_insertion: &[],
    extra_includes: &[],
};

/// Map of counted factories, with library-scoped removal.
pub const COUNTED_MAP: MapFragments = MapFragments {
    factory_type: "counted_factory",
    factory_header: "counted_factory.hpp",
    base_members: &["virtual bool remove_library(const char * library_name) = 0;"],
    container_contents: &[
        "int * counter_;",
        "explicit factory_container(int * counter)",
        "  : counter_(counter)",
        "{",
        "    ++(*counter_);",
        "}",
        "virtual ~factory_container()",
        "{",
        "    --(*counter_);",
        "}",
        "virtual bool remove_library(const char * library_name)",
        "{",
        "    for (typename {list}::iterator it = this->begin(); it != this->end();)",
        "    {",
        "        if (std::strcmp(it->library(), library_name) == 0)",
        "        {",
        "            it = this->erase(it);",
        "        }",
        "        else",
        "        {",
        "            ++it;",
        "        }",
        "    }",
        "    return this->empty();",
        "}",
    ],
    data_members: &[
        "std::string current_library_;",
        "int default_counter_;",
        "int * current_counter_;",
    ],
    public_members: &[
        "{map}()",
        "  : current_library_(),",
        "    default_counter_(0),",
        "    current_counter_(&default_counter_)",
        "{}",
        "void set_current_library(const char * library_name, int * counter)",
        "{",
        "    current_library_ = library_name;",
        "    current_counter_ = counter ? counter : &default_counter_;",
        "}",
    ],
    container_args: "current_counter_",
    pre_insertion: &[
        "f.set_library(current_library_.c_str());",
        "f.set_counter(current_counter_);",
    ],
    extra_includes: &["cstring", "string"],
};

impl MapFragments {
    /// Fragments of the given artifact, if it is a factory map.
    pub fn for_artifact(artifact: Artifact) -> Option<&'static MapFragments> {
        match artifact {
            Artifact::FactoryMap => Some(&PLAIN_MAP),
            Artifact::CountedFactoryMap => Some(&COUNTED_MAP),
            Artifact::Factory | Artifact::CountedFactory | Artifact::SharedLibrary => None,
        }
    }

    /// Map class template name.
    pub fn map_name(&self) -> String {
        format!("basic_{}_map", self.factory_type)
    }

    /// Name of the map typedef bound to the default type-info facility.
    pub fn typedef_name(&self) -> String {
        format!("{}_map", self.factory_type)
    }
}

/// Placeholder values for one rendered map.
struct Substitution {
    factory: &'static str,
    map: String,
    list: String,
}

impl Substitution {
    fn new(fragments: &MapFragments, max_params: usize) -> Self {
        let types = ParamList::new(max_params)
            .with_prefix(&["Interface", "Info"])
            .types();
        Substitution {
            factory: fragments.factory_type,
            map: fragments.map_name(),
            list: format!("std::list<{}<{types}> >", fragments.factory_type),
        }
    }

    fn apply(&self, line: &str) -> String {
        line.replace("{factory}", self.factory)
            .replace("{map}", &self.map)
            .replace("{list}", &self.list)
    }

    fn write_lines(&self, ctx: &mut EmitContext, lines: &[&str]) {
        for line in lines {
            ctx.writeln(&self.apply(line));
        }
    }
}

/// Render the complete header of a factory-map artifact.
pub fn render_header(
    config: &GeneratorConfig,
    artifact: Artifact,
    fragments: &MapFragments,
) -> String {
    let mut includes = vec![
        Include::System("list"),
        Include::System("map"),
        Include::System("memory"),
    ];
    includes.extend(fragments.extra_includes.iter().copied().map(Include::System));
    includes.extend([
        Include::Sibling(fragments.factory_header),
        Include::Sibling("extension.hpp"),
        Include::Sibling("impl/typeinfo.hpp"),
    ]);

    let mut ctx = EmitContext::new();
    frame::open(&mut ctx, config, artifact, &includes);
    let mut out = ctx.take_output();
    out.push_str(&render_map(fragments, config.max_params));
    frame::close(&mut ctx, config, artifact);
    out.push_str(&ctx.take_output());
    out
}

/// Render the map class template and its typedef.
pub fn render_map(fragments: &MapFragments, max_params: usize) -> String {
    let subst = Substitution::new(fragments, max_params);
    let map = subst.map.as_str();
    let mut ctx = EmitContext::new();

    ctx.writeln("template <class TypeInfo>");
    ctx.writeln(&format!("class {map}"));
    ctx.writeln("{");
    ctx.writeln("protected:");
    ctx.indent();

    ctx.writeln("class generic_factory_container");
    ctx.block("{", "};", |ctx| {
        ctx.access("public:");
        subst.write_lines(ctx, fragments.base_members);
        ctx.writeln("virtual ~generic_factory_container() {}");
    });

    let container_header = ParamList::new(max_params)
        .with_prefix(&["class Interface", "class Info"])
        .header(true);
    ctx.writeln(&format!("template <{container_header}>"));
    ctx.writeln(&format!(
        "class factory_container : public {}, public generic_factory_container",
        subst.list
    ));
    ctx.block("{", "};", |ctx| {
        ctx.access("public:");
        subst.write_lines(ctx, fragments.container_contents);
    });

    ctx.writeln("typedef std::map<TypeInfo, generic_factory_container *> FactoryMap;");
    ctx.writeln("FactoryMap factories_;");
    subst.write_lines(&mut ctx, fragments.data_members);

    ctx.access("public:");
    subst.write_lines(&mut ctx, fragments.public_members);
    ctx.writeln(&format!("{map}(const {map} &) = delete;"));
    ctx.writeln(&format!("{map} & operator=(const {map} &) = delete;"));
    ctx.writeln(&format!("~{map}()"));
    ctx.block("{", "}", |ctx| {
        ctx.writeln(
            "for (typename FactoryMap::iterator it = factories_.begin(); \
             it != factories_.end(); ++it)",
        );
        ctx.block("{", "}", |ctx| ctx.writeln("delete it->second;"));
    });
    let mut out = ctx.take_output();

    out.push_str(&emit_blocks(max_params, ArityOrder::Ascending, |arity| {
        render_operations(fragments, arity)
    }));

    ctx.dedent();
    ctx.writeln("};");
    ctx.newline();
    ctx.writeln(&format!(
        "typedef {map}<default_type_info> {};",
        fragments.typedef_name()
    ));
    ctx.newline();
    out.push_str(&ctx.take_output());
    out
}

/// Render the conversion, `get` and `add` operations of one arity.
pub fn render_operations(fragments: &MapFragments, arity: Arity) -> String {
    let mut ctx = EmitContext::with_indent(1);
    let factory = fragments.factory_type;
    let header = arity.params(&["class Interface", "class Info"]).header(false);
    let types = arity.params(&["Interface", "Info"]).types();
    let list = format!("std::list<{factory}<{types}> >");
    let container = format!("factory_container<{types}>");

    ctx.writeln(&format!("template <{header}>"));
    ctx.writeln(&format!("operator {list} & ()"));
    ctx.block("{", "}", |ctx| {
        ctx.writeln(&format!("return this->get<{types}>();"));
    });

    ctx.writeln(&format!("template <{header}>"));
    ctx.writeln(&format!("{list} & get()"));
    ctx.block("{", "}", |ctx| {
        ctx.writeln("TypeInfo current_type =");
        ctx.writeln(&format!(
            "    type_info_handler<TypeInfo, {factory}<{types}> >::get_class_type();"
        ));
        ctx.writeln("typename FactoryMap::iterator it = factories_.find(current_type);");
        ctx.writeln("if (it == factories_.end())");
        ctx.block("{", "}", |ctx| {
            ctx.writeln(&format!("{container} * ret ="));
            ctx.writeln(&format!("    new {container}({});", fragments.container_args));
            ctx.writeln("factories_[current_type] = ret;");
            ctx.writeln("return *ret;");
        });
        ctx.writeln(&format!("return dynamic_cast<{container} &>(*(it->second));"));
    });

    let add_header = arity
        .params(&["class Actual", "class Interface", "class Info"])
        .header(false);
    ctx.writeln(&format!("template <{add_header}>"));
    ctx.writeln("void add(Info info)");
    ctx.block("{", "}", |ctx| {
        ctx.writeln(&format!("{list} & s = this->get<{types}>();"));
        ctx.writeln(&format!("{factory}<{types}> f(info);"));
        ctx.write_lines(fragments.pre_insertion);
        ctx.writeln("f.template set_type<Actual>();");
        ctx.writeln("s.push_back(f);");
    });
    ctx.take_output()
}
