use super::*;
use crate::model::{ClassMember, Severity, Stage};
use crate::rules::test_support::{class, member};

fn run(definitions: &[ClassDefinition]) -> Vec<Issue> {
    check_canonical_form(&RuleInput {
        stage: Stage::Orthodox,
        definitions,
        sources: &[],
    })
}

fn canonical_members() -> Vec<ClassMember> {
    let mut copy = member("Fixed", MemberKind::CopyConstructor, 3);
    copy.signature = "(Fixed const &src)".to_string();
    let mut assign = member("operator=", MemberKind::AssignmentOperator, 5);
    assign.signature = "(Fixed const &rhs)".to_string();
    vec![
        member("Fixed", MemberKind::Constructor, 2),
        copy,
        member("~Fixed", MemberKind::Destructor, 4),
        assign,
    ]
}

#[test]
fn complete_canonical_form_has_no_issue() {
    assert!(run(&[class("Fixed", canonical_members())]).is_empty());
}

#[test]
fn destructor_only_class_yields_one_major_issue() {
    let issues = run(&[class("Zombie", vec![member("~Zombie", MemberKind::Destructor, 4)])]);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Major);
    assert_eq!(issues[0].category, Category::Lifecycle);
    assert!(issues[0].message.contains("default constructor"));
    assert!(issues[0].message.contains("copy assignment operator"));
    assert!(!issues[0].message.contains("destructor,"));
}

#[test]
fn class_without_any_canonical_member_is_ignored() {
    let defs = [class("Data", vec![member("_x", MemberKind::Variable, 2)])];
    assert!(run(&defs).is_empty());
}

#[test]
fn parameterized_constructor_is_not_a_default_constructor() {
    let mut members = canonical_members();
    members[0].signature = "(int raw)".to_string();
    let issues = run(&[class("Fixed", members)]);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.ends_with("missing default constructor"));
}

#[test]
fn fully_defaulted_constructor_counts_as_default() {
    let mut members = canonical_members();
    members[0].signature = "(int raw = 0)".to_string();
    assert!(run(&[class("Fixed", members)]).is_empty());
}

#[test]
fn same_named_classes_in_one_group_are_pooled() {
    let mut members = canonical_members();
    let tail = members.split_off(2);
    let defs = [class("Fixed", members), class("Fixed", tail)];
    assert!(run(&defs).is_empty());
}

#[test]
fn same_name_in_different_groups_is_judged_separately() {
    let mut members = canonical_members();
    let tail = members.split_off(2);
    let mut other = class("Fixed", tail);
    other.exercise_group = "ex01".to_string();
    let issues = run(&[class("Fixed", members), other]);
    assert_eq!(issues.len(), 2);
}

#[test]
fn pooled_class_is_reported_at_earliest_definition() {
    let mut in_a = class("Foo", vec![member("Foo", MemberKind::Constructor, 1)]);
    in_a.origin_file = "ex00/a.hpp".into();
    let mut in_b = class("Foo", vec![member("~Foo", MemberKind::Destructor, 1)]);
    in_b.origin_file = "ex00/b.hpp".into();

    for definitions in [[in_a.clone(), in_b.clone()], [in_b, in_a]] {
        let issues = run(&definitions);
        assert_eq!(issues.len(), 1);
        let location = issues[0].location.as_ref().unwrap();
        assert_eq!(location.file, std::path::PathBuf::from("ex00/a.hpp"));
        assert_eq!(location.line, 1);
    }
}
