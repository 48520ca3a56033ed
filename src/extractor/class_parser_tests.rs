use super::*;
use crate::model::MemberKind;

fn extract(path: &str, text: &str) -> Extraction {
    ClassDefinitionExtractor::new().extract_file(&SourceFile::new(path, text))
}

fn names(definition: &ClassDefinition) -> Vec<&str> {
    definition.members.iter().map(|m| m.name.as_str()).collect()
}

const FIXED_HPP: &str = "\
#ifndef FIXED_HPP
# define FIXED_HPP

class Fixed
{
public:
    Fixed();
    Fixed(Fixed const &src);
    ~Fixed();
    Fixed &operator=(Fixed const &rhs);
    int getRawBits(void) const;
private:
    int _raw;
    static const int _bits = 8;
};

#endif
";

#[test]
fn extracts_orthodox_class() {
    let result = extract("ex00/Fixed.hpp", FIXED_HPP);
    assert!(result.unterminated.is_empty());
    assert_eq!(result.definitions.len(), 1);

    let fixed = &result.definitions[0];
    assert_eq!(fixed.name, "Fixed");
    assert_eq!(fixed.keyword, ClassKeyword::Class);
    assert_eq!(fixed.exercise_group, "ex00");
    assert_eq!(fixed.start_line, 4);
    assert_eq!(fixed.end_line, 15);
    assert_eq!(
        names(fixed),
        vec!["Fixed", "Fixed", "~Fixed", "operator=", "getRawBits", "_raw", "_bits"]
    );

    let kinds: Vec<_> = fixed.members.iter().map(|m| m.kind).collect();
    assert_eq!(
        kinds,
        vec![
            MemberKind::Constructor,
            MemberKind::CopyConstructor,
            MemberKind::Destructor,
            MemberKind::AssignmentOperator,
            MemberKind::Function,
            MemberKind::Variable,
            MemberKind::Variable,
        ]
    );
    assert_eq!(fixed.members[0].access, Access::Public);
    assert_eq!(fixed.members[0].line, 7);
    assert_eq!(fixed.members[5].access, Access::Private);
    assert_eq!(fixed.members[5].line, 13);
    assert!(!fixed.is_abstract);
}

#[test]
fn member_lines_are_non_decreasing() {
    let result = extract("Fixed.hpp", FIXED_HPP);
    let lines: Vec<_> = result.definitions[0].members.iter().map(|m| m.line).collect();
    assert!(lines.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn class_members_default_to_private_and_struct_members_to_public() {
    let result = extract("a.hpp", "class A { int x; };\nstruct B { int y; int z; };\n");
    assert_eq!(result.definitions.len(), 2);
    assert_eq!(result.definitions[0].members[0].access, Access::Private);

    let b = &result.definitions[1];
    assert_eq!(b.keyword, ClassKeyword::Struct);
    assert!(b.members.iter().all(|m| m.access == Access::Public));
    assert_eq!(b.start_line, 2);
    assert_eq!(b.end_line, 2);
}

#[test]
fn parses_base_class_list() {
    let result = extract(
        "Dog.hpp",
        "class Dog : public Animal, private virtual Named<int, char> {\npublic:\n  Dog();\n};\n",
    );
    let dog = &result.definitions[0];
    assert_eq!(dog.base_classes, vec!["Animal", "Named<int, char>"]);
}

#[test]
fn final_class_and_qualified_base() {
    let result = extract(
        "e.hpp",
        "class TooHigh final : public std::exception {\n  const char *what() const throw();\n};",
    );
    let def = &result.definitions[0];
    assert_eq!(def.name, "TooHigh");
    assert_eq!(def.base_classes, vec!["std::exception"]);
    assert_eq!(def.members[0].name, "what");
}

#[test]
fn forward_declaration_opens_no_class() {
    let result = extract("b.hpp", "class Brain;\nclass Cat {\n  Brain *_brain;\n};\n");
    assert_eq!(result.definitions.len(), 1);
    assert_eq!(result.definitions[0].name, "Cat");
    assert_eq!(result.definitions[0].members[0].declared_type, "Brain *");
}

#[test]
fn nested_class_members_stay_with_innermost_context() {
    let source = "\
class Outer {
public:
    class Inner {
    public:
        int value;
    };
    Outer();
};
";
    let result = extract("o.hpp", source);
    assert_eq!(result.definitions.len(), 2);

    let inner = &result.definitions[0];
    assert_eq!(inner.name, "Inner");
    assert_eq!(names(inner), vec!["value"]);
    assert_eq!((inner.start_line, inner.end_line), (3, 6));

    let outer = &result.definitions[1];
    assert_eq!(outer.name, "Outer");
    assert_eq!(names(outer), vec!["Outer"]);
    assert_eq!(outer.members[0].access, Access::Public);
    assert_eq!(outer.members[0].line, 7);
}

#[test]
fn inline_bodies_and_brace_initializers() {
    let source = "\
class A {
public:
    A() : _x(0) { if (_x) { _x = 1; } }
    int get() const { return _x; }
private:
    int _x{0};
    int _y = 2;
    enum Mode { ON, OFF };
};
";
    let result = extract("a.hpp", source);
    let a = &result.definitions[0];
    assert_eq!(names(a), vec!["A", "get", "_x", "_y"]);
    assert!(a.members[0].is_default_constructor());
    assert_eq!(a.members[2].line, 6);
}

#[test]
fn unknown_access_label_and_qualified_labels() {
    let source = "\
class Widget {
signals:
    void changed();
public slots:
    void refresh();
protected:
    int _state;
};
";
    let result = extract("w.hpp", source);
    let widget = &result.definitions[0];
    let access: Vec<_> = widget.members.iter().map(|m| m.access).collect();
    assert_eq!(access, vec![Access::Unknown, Access::Public, Access::Protected]);
}

#[test]
fn label_after_unterminated_macro_line() {
    let source = "\
class Widget {
    Q_OBJECT
public:
    void refresh();
private:
    int _state;
};
";
    let result = extract("w.hpp", source);
    let widget = &result.definitions[0];
    assert_eq!(names(widget), vec!["refresh", "_state"]);
    let access: Vec<_> = widget.members.iter().map(|m| m.access).collect();
    assert_eq!(access, vec![Access::Public, Access::Private]);
}

#[test]
fn bitfields_are_not_access_labels() {
    let result = extract("f.hpp", "struct Flags {\n  unsigned int ready : 1;\n};");
    let flags = &result.definitions[0];
    assert_eq!(names(flags), vec!["ready"]);
    assert_eq!(flags.members[0].access, Access::Public);
}

#[test]
fn unterminated_class_is_reported_and_siblings_survive() {
    let source = "\
class Good {
    int x;
};
class Broken {
    int y;
";
    let result = extract("ex01/Broken.hpp", source);
    assert_eq!(result.definitions.len(), 1);
    assert_eq!(result.definitions[0].name, "Good");
    assert_eq!(
        result.unterminated,
        vec![UnterminatedClass {
            name: "Broken".to_string(),
            file: "ex01/Broken.hpp".into(),
            start_line: 4,
        }]
    );
}

#[test]
fn braces_in_comments_and_strings_do_not_count() {
    let source = "\
class A { // }
    /* { */ int x;
    const char *s() { return \"}}}\"; }
};
";
    let result = extract("a.hpp", source);
    assert!(result.unterminated.is_empty());
    assert_eq!(names(&result.definitions[0]), vec!["x", "s"]);
}

#[test]
fn excess_closing_braces_clamp_at_zero() {
    let result = extract("x.cpp", "}\n}\nclass A { int x; };\n");
    assert_eq!(result.definitions.len(), 1);
    assert_eq!(result.definitions[0].name, "A");
}

#[test]
fn braces_in_default_arguments_keep_class_depth() {
    let result = extract("p.hpp", "class P { void f(Foo x = Foo{}); int y; };");
    let p = &result.definitions[0];
    assert_eq!(names(p), vec!["f", "y"]);
    assert_eq!(p.end_line, 1);
}

#[test]
fn pure_virtual_member_makes_class_abstract() {
    let result = extract(
        "AAnimal.hpp",
        "class AAnimal {\npublic:\n  virtual ~AAnimal();\n  virtual void makeSound() const = 0;\n};",
    );
    assert!(result.definitions[0].is_abstract);
}

#[test]
fn template_class_with_members() {
    let source = "\
template <typename T>
class Array {
public:
    Array(Array const &other);
    T &operator[](unsigned int i);
private:
    T *_data;
};
";
    let result = extract("ex02/Array.hpp", source);
    let array = &result.definitions[0];
    assert_eq!(array.name, "Array");
    assert_eq!(array.members[0].kind, MemberKind::CopyConstructor);
    assert_eq!(array.members[1].name, "operator[]");
}

#[test]
fn classes_inside_namespaces_are_found() {
    let result = extract("ft.hpp", "namespace ft {\nclass Span {\n  int n;\n};\n}\n");
    assert_eq!(result.definitions.len(), 1);
    assert_eq!(result.definitions[0].name, "Span");
}

#[test]
fn implementation_file_without_classes_yields_nothing() {
    let source = "\
#include \"Fixed.hpp\"

Fixed::Fixed(Fixed const &src) : _raw(src._raw) {
    std::cout << \"class Copy {\" << std::endl;
}
";
    let result = extract("Fixed.cpp", source);
    assert_eq!(result, Extraction::default());
}
