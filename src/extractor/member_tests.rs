use super::*;

fn ctx(class_name: &str) -> MemberContext<'_> {
    MemberContext {
        class_name,
        access: Access::Private,
        line: 7,
    }
}

fn parse_one(statement: &str, class_name: &str) -> ClassMember {
    let members = MemberParser::new().parse(statement, ctx(class_name));
    assert_eq!(members.len(), 1, "expected one member from {statement:?}");
    members.into_iter().next().unwrap()
}

#[test]
fn default_constructor() {
    let m = parse_one("Fixed();", "Fixed");
    assert_eq!(m.kind, MemberKind::Constructor);
    assert_eq!(m.name, "Fixed");
    assert_eq!(m.signature, "()");
    assert_eq!(m.line, 7);
    assert_eq!(m.access, Access::Private);
}

#[test]
fn parameterized_constructor_is_constructor() {
    let m = parse_one("explicit Fixed(int const raw);", "Fixed");
    assert_eq!(m.kind, MemberKind::Constructor);
    assert_eq!(m.declared_type, "");
}

#[test]
fn copy_constructor_by_const_reference() {
    for decl in [
        "Fixed(const Fixed &other);",
        "Fixed(Fixed const& src);",
        "Fixed( const Fixed & );",
        "Fixed(Fixed other);",
    ] {
        assert_eq!(
            parse_one(decl, "Fixed").kind,
            MemberKind::CopyConstructor,
            "{decl}"
        );
    }
}

#[test]
fn template_copy_constructor() {
    let m = parse_one("Array(Array<T> const &other);", "Array");
    assert_eq!(m.kind, MemberKind::CopyConstructor);
}

#[test]
fn move_and_pointer_constructors_are_not_copies() {
    assert_eq!(parse_one("Fixed(Fixed &&other);", "Fixed").kind, MemberKind::Constructor);
    assert_eq!(parse_one("Fixed(Fixed *other);", "Fixed").kind, MemberKind::Constructor);
    assert_eq!(
        parse_one("Fixed(const Fixed &a, int b);", "Fixed").kind,
        MemberKind::Constructor
    );
}

#[test]
fn destructor_and_virtual_destructor() {
    let plain = parse_one("~Animal();", "Animal");
    assert_eq!(plain.kind, MemberKind::Destructor);
    assert!(!plain.is_virtual);

    let virt = parse_one("virtual ~Animal(void);", "Animal");
    assert_eq!(virt.kind, MemberKind::Destructor);
    assert!(virt.is_virtual);
    assert_eq!(virt.name, "~Animal");
}

#[test]
fn destructor_of_other_class_is_function() {
    assert_eq!(parse_one("~Other();", "Animal").kind, MemberKind::Function);
}

#[test]
fn override_marks_destructor_virtual() {
    let m = parse_one("~Dog() override;", "Dog");
    assert_eq!(m.kind, MemberKind::Destructor);
    assert!(m.is_virtual);
}

#[test]
fn assignment_operator() {
    let m = parse_one("Fixed &operator=(const Fixed &rhs);", "Fixed");
    assert_eq!(m.kind, MemberKind::AssignmentOperator);
    assert_eq!(m.name, "operator=");
    assert_eq!(m.declared_type, "Fixed &");
    assert_eq!(m.signature, "(const Fixed &rhs)");
}

#[test]
fn spaced_assignment_operator() {
    let m = parse_one("Fixed & operator = (Fixed const & rhs);", "Fixed");
    assert_eq!(m.kind, MemberKind::AssignmentOperator);
    assert_eq!(m.name, "operator=");
}

#[test]
fn other_operators_are_functions() {
    let cmp = parse_one("bool operator<(Fixed const &rhs) const;", "Fixed");
    assert_eq!(cmp.kind, MemberKind::Function);
    assert_eq!(cmp.name, "operator<");
    assert!(cmp.is_const);

    let call = parse_one("int operator()(int x);", "Functor");
    assert_eq!(call.name, "operator()");
    assert_eq!(call.signature, "(int x)");

    let conversion = parse_one("operator int() const;", "Fixed");
    assert_eq!(conversion.name, "operator int");
}

#[test]
fn plain_function_with_modifiers() {
    let m = parse_one("static int getCount(void);", "Zombie");
    assert_eq!(m.kind, MemberKind::Function);
    assert_eq!(m.name, "getCount");
    assert_eq!(m.declared_type, "int");
    assert!(m.is_static);
    assert!(!m.is_virtual);
}

#[test]
fn pure_virtual_function() {
    let m = parse_one("virtual void makeSound() const = 0;", "Animal");
    assert!(m.is_pure);
    assert!(m.is_virtual);
    assert!(m.is_const);
    assert_eq!(m.kind, MemberKind::Function);
}

#[test]
fn multiline_declaration_is_normalized() {
    let m = parse_one(
        "void   setContact(std::string first,\n\t\tstd::string last);",
        "Contact",
    );
    assert_eq!(m.signature, "(std::string first, std::string last)");
}

#[test]
fn member_template_function() {
    let m = parse_one("template <typename T> void apply(T &value);", "Visitor");
    assert_eq!(m.kind, MemberKind::Function);
    assert_eq!(m.name, "apply");
}

#[test]
fn simple_variable() {
    let m = parse_one("std::string _name;", "Zombie");
    assert_eq!(m.kind, MemberKind::Variable);
    assert_eq!(m.name, "_name");
    assert_eq!(m.declared_type, "std::string");
    assert!(m.signature.is_empty());
}

#[test]
fn static_const_variable_with_initializer() {
    let m = parse_one("static const int _fractionalBits = 8;", "Fixed");
    assert_eq!(m.name, "_fractionalBits");
    assert_eq!(m.declared_type, "const int");
    assert!(m.is_static);
    assert!(m.is_const);
}

#[test]
fn multiple_declarators_produce_multiple_members() {
    let members = MemberParser::new().parse("int _x, *_y, _z[4];", ctx("Point"));
    let names: Vec<_> = members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["_x", "_y", "_z"]);
    assert_eq!(members[1].declared_type, "int*");
    assert!(members.iter().all(|m| m.line == 7));
}

#[test]
fn array_and_bitfield_members() {
    assert_eq!(parse_one("Contact _contacts[8];", "PhoneBook").name, "_contacts");
    assert_eq!(parse_one("unsigned int flag : 1;", "Bits").name, "flag");
}

#[test]
fn template_typed_variable() {
    let m = parse_one("std::map<std::string, int> _index;", "Db");
    assert_eq!(m.name, "_index");
    assert_eq!(m.kind, MemberKind::Variable);
}

#[test]
fn function_pointer_member_is_variable() {
    let table = parse_one("void (Harl::*handlers[4])(void);", "Harl");
    assert_eq!(table.kind, MemberKind::Variable);
    assert_eq!(table.name, "handlers");
    assert!(table.signature.is_empty());

    let ptr = parse_one("void (*callback)(int);", "Timer");
    assert_eq!(ptr.kind, MemberKind::Variable);
    assert_eq!(ptr.name, "callback");
}

#[test]
fn non_members_are_skipped() {
    let parser = MemberParser::new();
    for text in [
        "friend std::ostream &operator<<(std::ostream &o, Fixed const &f);",
        "friend class Other;",
        "typedef int value_type;",
        "using Base::speak;",
        "class Node;",
        "enum Color { RED };",
        "Q_OBJECT",
        ";",
        "",
    ] {
        assert!(parser.parse(text, ctx("Fixed")).is_empty(), "{text:?}");
    }
}
