use super::*;
use pretty_assertions::assert_eq;

#[test]
fn functor_arity_zero_specialization() {
    let block = render_functor(Arity::new(0, 2));
    let expected = "\
template <class ReturnValue>
class functor<ReturnValue>
{
protected:
    typedef ReturnValue (*FunctionType)();
    FunctionType func_;
public:
    bool is_valid() const
    {
        return func_ != 0;
    }
    functor(FunctionType func)
      : func_(func)
    {}
    functor(generic_function_ptr func)
      : func_(FunctionType(func))
    {}
    ReturnValue operator()()
    {
        return func_();
    }
};

";
    assert_eq!(block, expected);
}

#[test]
fn functor_max_arity_is_primary_template() {
    let block = render_functor(Arity::new(2, 2));
    assert!(block.starts_with(
        "template <class ReturnValue, class Param1 = void, class Param2 = void>\nclass functor\n"
    ));
    assert!(block.contains("typedef ReturnValue (*FunctionType)(Param1, Param2);"));
    assert!(block.contains("ReturnValue operator()(Param1 p1, Param2 p2)"));
    assert!(block.contains("return func_(p1, p2);"));
}

#[test]
fn accessor_has_no_defaults() {
    let accessor = render_accessor(Arity::new(2, 2));
    let expected = "    template <class ReturnValue, class Param1, class Param2>
    functor<ReturnValue, Param1, Param2> get_functor(const char * function_name)
    {
        return functor<ReturnValue, Param1, Param2>(get_function(handle_, function_name));
    }
";
    assert_eq!(accessor, expected);
}

#[test]
fn shared_library_lists_accessors_ascending() {
    let library = render_shared_library(2);
    let zero = library.find("functor<ReturnValue> get_functor").unwrap();
    let one = library.find("functor<ReturnValue, Param1> get_functor").unwrap();
    let two = library
        .find("functor<ReturnValue, Param1, Param2> get_functor")
        .unwrap();
    assert!(zero < one && one < two);
    assert!(library.starts_with("class shared_library\n{\nprotected:\n"));
    assert!(library.contains("    bool is_open() const\n"));
    assert!(library.contains("    static bool is_linkable_library(const char * file_name)\n"));
    assert!(library.contains("    bool open()\n"));
    assert!(library.contains("    bool close()\n"));
    assert!(library.contains("    ~shared_library()\n"));
    assert!(library.ends_with("};\n\n"));
}

#[test]
fn header_includes_library_impl() {
    let config = GeneratorConfig::default().with_max_params(1);
    let header = render_header(&config);
    assert!(header.contains("#include <boost/extension/impl/library_impl.hpp>"));
    assert!(header.contains("#define BOOST_EXTENSION_LINKED_LIBRARY_HPP"));
    let primary = header.find("class functor\n").unwrap();
    let zero = header.find("class functor<ReturnValue>\n").unwrap();
    let library = header.find("class shared_library\n").unwrap();
    assert!(primary < zero && zero < library);
}
