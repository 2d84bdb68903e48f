use super::*;
use pretty_assertions::assert_eq;

fn lines(lines: &[&str]) -> String {
    let mut out = lines.join("\n");
    out.push_str("\n\n");
    out
}

#[test]
fn plain_arity_zero_block_is_a_specialization() {
    let block = render_block(&PLAIN_FACTORY, Arity::new(0, 1));
    let expected = lines(&[
        "template <class Interface, class Info>",
        "class factory<Interface, Info>",
        "{",
        "protected:",
        "    class generic_factory_function",
        "    {",
        "    public:",
        "        virtual ~generic_factory_function() {}",
        "        virtual Interface * operator()() = 0;",
        "        virtual generic_factory_function * copy() const = 0;",
        "    };",
        "    template <class T>",
        "    class factory_function : public generic_factory_function",
        "    {",
        "    public:",
        "        virtual ~factory_function() {}",
        "        virtual Interface * operator()()",
        "        {",
        "            return new T();",
        "        }",
        "        virtual generic_factory_function * copy() const",
        "        {",
        "            return new factory_function<T>;",
        "        }",
        "    };",
        "    std::unique_ptr<generic_factory_function> factory_func_ptr_;",
        "    Info info_;",
        "public:",
        "    template <class Actual>",
        "    void set_type()",
        "    {",
        "        factory_func_ptr_.reset(new factory_function<Actual>());",
        "    }",
        "    explicit factory(Info info)",
        "      : factory_func_ptr_(),",
        "        info_(info)",
        "    {}",
        "    factory(const factory & first)",
        "      : factory_func_ptr_(first.factory_func_ptr_ ? first.factory_func_ptr_->copy() \
         : throw unbound_factory(\"copy\")),",
        "        info_(first.info_)",
        "    {}",
        "    Interface * operator()()",
        "    {",
        "        return create();",
        "    }",
        "    Interface * create()",
        "    {",
        "        if (!factory_func_ptr_)",
        "        {",
        "            throw unbound_factory(\"create\");",
        "        }",
        "        return (*factory_func_ptr_)();",
        "    }",
        "    Info & get_info()",
        "    {",
        "        return info_;",
        "    }",
        "};",
    ]);
    assert_eq!(block, expected);
}

#[test]
fn max_arity_block_is_the_primary_template() {
    let block = render_block(&PLAIN_FACTORY, Arity::new(2, 2));
    assert!(block.starts_with(
        "template <class Interface, class Info, class Param1 = void, class Param2 = void>\n\
         class factory\n{\n"
    ));
    assert!(block.contains("virtual Interface * operator()(Param1, Param2) = 0;"));
    assert!(block.contains("virtual Interface * operator()(Param1 p1, Param2 p2)"));
    assert!(block.contains("return new T(p1, p2);"));
    assert!(block.contains("Interface * create(Param1 p1, Param2 p2)"));
    assert!(block.contains("return (*factory_func_ptr_)(p1, p2);"));
}

#[test]
fn lower_arity_has_no_void_defaults() {
    let block = render_block(&PLAIN_FACTORY, Arity::new(1, 2));
    assert!(block.starts_with(
        "template <class Interface, class Info, class Param1>\n\
         class factory<Interface, Info, Param1>\n"
    ));
    assert!(!block.contains("= void"));
}

#[test]
fn counted_block_injects_counter_fragments() {
    let block = render_block(&COUNTED_FACTORY, Arity::new(1, 1));
    assert!(block.contains("class counted_factory\n"));
    assert!(block.contains("virtual Interface * operator()(int * counter, Param1) = 0;"));
    assert!(block.contains("class counted_object : public T"));
    assert!(block.contains("counted_object(int * counter, Param1 p1)"));
    assert!(block.contains("  : T(p1),\n"));
    assert!(block.contains("counter_(counter)"));
    assert!(block.contains("++(*counter_);"));
    assert!(block.contains("~counted_object()"));
    assert!(block.contains("--(*counter_);"));
    assert!(block.contains("return static_cast<Interface *>(new counted_object(counter, p1));"));
    assert!(block.contains("return (*factory_func_ptr_)(counter_, p1);"));
    assert!(block.contains("void set_library(const char * library_name)"));
    assert!(block.contains("const char * library() const"));
    assert!(block.contains("library_(first.library_)"));
    assert!(block.contains("std::string library_;"));
}

#[test]
fn counted_arity_zero_has_no_stray_separator() {
    let block = render_block(&COUNTED_FACTORY, Arity::new(0, 3));
    assert!(block.contains("virtual Interface * operator()(int * counter) = 0;"));
    assert!(block.contains("counted_object(int * counter)"));
    assert!(block.contains("  : T(),\n"));
    assert!(block.contains("new counted_object(counter))"));
    assert!(block.contains("return (*factory_func_ptr_)(counter_);"));
    assert!(!block.contains(", )"));
    assert!(!block.contains("(, "));
}

#[test]
fn plain_factory_has_no_counted_members() {
    let block = render_block(&PLAIN_FACTORY, Arity::new(3, 3));
    assert!(!block.contains("counter"));
    assert!(!block.contains("library"));
}

#[test]
fn header_emits_blocks_in_descending_order() {
    let config = GeneratorConfig::default().with_max_params(2);
    let header = render_header(&config, Artifact::Factory, &PLAIN_FACTORY);
    let two = header.find("class factory\n").unwrap();
    let one = header.find("class factory<Interface, Info, Param1>\n").unwrap();
    let zero = header.find("class factory<Interface, Info>\n").unwrap();
    assert!(two < one && one < zero);
    assert!(header.contains("class unbound_factory : public std::logic_error"));
    assert!(header.contains("#ifndef BOOST_EXTENSION_FACTORY_HPP"));
    assert!(header.trim_end().ends_with("#endif // BOOST_EXTENSION_FACTORY_HPP"));
}

#[test]
fn fragments_lookup_by_artifact() {
    assert_eq!(
        SkeletonFragments::for_artifact(Artifact::Factory),
        Some(&PLAIN_FACTORY)
    );
    assert_eq!(
        SkeletonFragments::for_artifact(Artifact::CountedFactory),
        Some(&COUNTED_FACTORY)
    );
    assert_eq!(SkeletonFragments::for_artifact(Artifact::FactoryMap), None);
}
