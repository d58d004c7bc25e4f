mod support;

use std::sync::OnceLock;

use fieldmap::{
    copy_properties, read_field, DescriptorTable, Record, SkipReason, ValidationError, Value,
    ValueType,
};
use support::{sample_employee, Employee, PetProfile};

#[test]
fn copy_fidelity_between_matching_shapes() {
    let source = sample_employee();
    let mut target = Employee::default();

    let report = copy_properties(Some(&source), Some(&mut target)).unwrap();

    // Every readable/writable pair equals the pre-copy source value.
    assert_eq!(target.employee_id, source.employee_id);
    assert_eq!(target.first_name, source.first_name);
    assert_eq!(target.last_name, source.last_name);
    assert!((target.salary - source.salary).abs() < f64::EPSILON);
    assert_eq!(target.department, source.department);
    assert_eq!(target.hire_date, source.hire_date);
    assert_eq!(target.active, source.active);

    assert!(report.was_copied("salary"));
    assert!(report.was_copied("fullName"));
}

#[test]
fn selective_copy_leaves_readonly_fields_alone() {
    let source = sample_employee();
    let mut target = Employee::default();

    let report = copy_properties(Some(&source), Some(&mut target)).unwrap();

    // formattedSalary is readable on both but writable on neither.
    assert_eq!(
        report.skip_reason("formattedSalary"),
        Some(&SkipReason::NoWriter)
    );
    assert!(!report.was_copied("formattedSalary"));
}

#[test]
fn null_source_leaves_target_unchanged() {
    let mut target = sample_employee();
    let before = target.clone();

    let report = copy_properties::<Employee, Employee>(None, Some(&mut target)).unwrap();

    assert!(report.is_empty());
    assert_eq!(target, before);
}

#[test]
fn null_target_is_silent_noop() {
    let source = sample_employee();
    let report = copy_properties::<Employee, Employee>(Some(&source), None).unwrap();
    assert!(report.is_empty());
}

#[test]
fn validation_rejection_propagates_and_leaves_field_unchanged() {
    // A pet aged 3 copied into a profile whose evolution-stage bound is 2:
    // the age write must be rejected and the target's age kept.
    let source = PetProfile::new("Draco", 3, 5);
    let mut target = PetProfile::new("Slug", 1, 2);

    let err = copy_properties(Some(&source), Some(&mut target)).unwrap_err();

    assert_eq!(
        err,
        ValidationError::OutOfRange {
            field: "age".to_string(),
            min: 0.0,
            max: 2.0,
            actual: 3.0,
        }
    );
    assert_eq!(target.age, 1);
}

#[test]
fn fields_before_a_rejection_stay_applied() {
    // No rollback: name is declared before age, so the name write sticks
    // even though the pass aborts on the age rejection.
    let source = PetProfile::new("Draco", 3, 5);
    let mut target = PetProfile::new("Slug", 1, 2);

    copy_properties(Some(&source), Some(&mut target)).unwrap_err();

    assert_eq!(target.name, "Draco");
    assert_eq!(target.age, 1);
}

#[test]
fn copy_within_bound_succeeds() {
    let source = PetProfile::new("Draco", 2, 5);
    let mut target = PetProfile::new("Slug", 0, 2);

    let report = copy_properties(Some(&source), Some(&mut target)).unwrap();

    assert_eq!(target.age, 2);
    assert_eq!(target.name, "Draco");
    assert!(report.was_copied("age"));
}

#[test]
fn copy_is_idempotent() {
    let source = sample_employee();

    let mut once = Employee::default();
    copy_properties(Some(&source), Some(&mut once)).unwrap();

    let mut twice = Employee::default();
    copy_properties(Some(&source), Some(&mut twice)).unwrap();
    copy_properties(Some(&source), Some(&mut twice)).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn copy_never_mutates_source() {
    let source = sample_employee();
    let snapshot = source.clone();
    let mut target = Employee::default();

    copy_properties(Some(&source), Some(&mut target)).unwrap();

    assert_eq!(source, snapshot);
}

/// A narrower shape than [`Employee`]: only a name and a department.
struct ContactCard {
    full_name: String,
    department: String,
}

impl Record for ContactCard {
    fn descriptors() -> &'static DescriptorTable<Self> {
        static TABLE: OnceLock<DescriptorTable<ContactCard>> = OnceLock::new();
        TABLE.get_or_init(|| {
            DescriptorTable::builder()
                .reader("getFullName", ValueType::String, |c: &ContactCard| {
                    Ok(Value::String(c.full_name.clone()))
                })
                .writer("setFullName", ValueType::String, |c: &mut ContactCard, v| {
                    c.full_name = v.as_string().unwrap_or_default().to_string();
                    Ok(())
                })
                .reader("getDepartment", ValueType::String, |c: &ContactCard| {
                    Ok(Value::String(c.department.clone()))
                })
                .writer("setDepartment", ValueType::String, |c: &mut ContactCard, v| {
                    c.department = v.as_string().unwrap_or_default().to_string();
                    Ok(())
                })
                .build()
                .expect("contact card table")
        })
    }
}

#[test]
fn cross_type_copy_takes_the_shared_shape() {
    let source = sample_employee();
    let mut card = ContactCard {
        full_name: String::new(),
        department: String::new(),
    };

    let report = copy_properties(Some(&source), Some(&mut card)).unwrap();

    assert_eq!(card.full_name, "Jane Smith");
    assert_eq!(card.department, "HR");
    assert_eq!(report.copied, vec!["department", "fullName"]);
    // Everything else on the employee has no counterpart on the card.
    assert_eq!(report.skip_reason("salary"), Some(&SkipReason::NoWriter));
    assert_eq!(report.skip_reason("hireDate"), Some(&SkipReason::NoWriter));
}

#[test]
fn shape_compatibility_between_tables() {
    assert!(Employee::descriptors().shape_compatible(ContactCard::descriptors()));
    assert!(!PetProfile::descriptors().shape_compatible(ContactCard::descriptors()));
}

#[test]
fn read_field_sees_computed_properties() {
    let source = sample_employee();
    assert_eq!(
        read_field(&source, "fullName"),
        Some(Ok(Value::String("Jane Smith".to_string())))
    );
    assert_eq!(
        read_field(&source, "formattedSalary"),
        Some(Ok(Value::String("$72000.00".to_string())))
    );
}
