//! Sample record types shared by the integration suites.

#![allow(dead_code)]

use std::sync::OnceLock;

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use fieldmap::{DescriptorTable, Record, ValidationError, Value, ValueType};

/// An employee record with a validating salary writer and two computed
/// read-only fields (`fullName` is both computed and writable; the writer
/// splits it back into first and last name).
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub employee_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
    pub department: String,
    pub hire_date: DateTime<Utc>,
    pub active: bool,
}

impl Default for Employee {
    fn default() -> Self {
        Self {
            employee_id: Uuid::nil(),
            first_name: String::new(),
            last_name: String::new(),
            salary: 0.0,
            department: String::new(),
            hire_date: Utc.with_ymd_and_hms(2020, 1, 15, 0, 0, 0).unwrap(),
            active: false,
        }
    }
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for Employee {
    fn descriptors() -> &'static DescriptorTable<Self> {
        static TABLE: OnceLock<DescriptorTable<Employee>> = OnceLock::new();
        TABLE.get_or_init(|| {
            DescriptorTable::builder()
                .reader("getEmployeeId", ValueType::Uuid, |e: &Employee| {
                    Ok(Value::Uuid(e.employee_id))
                })
                .writer("setEmployeeId", ValueType::Uuid, |e: &mut Employee, v| {
                    e.employee_id = v.as_uuid().unwrap_or_default();
                    Ok(())
                })
                .reader("getFirstName", ValueType::String, |e: &Employee| {
                    Ok(Value::String(e.first_name.clone()))
                })
                .writer("setFirstName", ValueType::String, |e: &mut Employee, v| {
                    e.first_name = v.as_string().unwrap_or_default().to_string();
                    Ok(())
                })
                .reader("getLastName", ValueType::String, |e: &Employee| {
                    Ok(Value::String(e.last_name.clone()))
                })
                .writer("setLastName", ValueType::String, |e: &mut Employee, v| {
                    e.last_name = v.as_string().unwrap_or_default().to_string();
                    Ok(())
                })
                .reader("getSalary", ValueType::Float, |e: &Employee| {
                    Ok(Value::Float(e.salary))
                })
                .writer("setSalary", ValueType::Float, |e: &mut Employee, v| {
                    let salary = v.as_float().unwrap_or_default();
                    if salary < 0.0 {
                        return Err(ValidationError::rejected(
                            "salary",
                            "Salary must be positive.",
                        ));
                    }
                    e.salary = salary;
                    Ok(())
                })
                .reader("getDepartment", ValueType::String, |e: &Employee| {
                    Ok(Value::String(e.department.clone()))
                })
                .writer("setDepartment", ValueType::String, |e: &mut Employee, v| {
                    e.department = v.as_string().unwrap_or_default().to_string();
                    Ok(())
                })
                .reader("getHireDate", ValueType::Timestamp, |e: &Employee| {
                    Ok(Value::Timestamp(e.hire_date))
                })
                .writer("setHireDate", ValueType::Timestamp, |e: &mut Employee, v| {
                    e.hire_date = v.as_timestamp().unwrap_or_default();
                    Ok(())
                })
                .reader("isActive", ValueType::Bool, |e: &Employee| {
                    Ok(Value::Bool(e.active))
                })
                .writer("setActive", ValueType::Bool, |e: &mut Employee, v| {
                    e.active = v.as_bool().unwrap_or_default();
                    Ok(())
                })
                // Computed, writable: the writer splits on whitespace.
                .reader("getFullName", ValueType::String, |e: &Employee| {
                    Ok(Value::String(e.full_name()))
                })
                .writer("setFullName", ValueType::String, |e: &mut Employee, v| {
                    let full = v.as_string().unwrap_or_default().trim().to_string();
                    let mut parts = full.splitn(2, char::is_whitespace);
                    e.first_name = parts.next().unwrap_or_default().to_string();
                    e.last_name = parts.next().unwrap_or_default().to_string();
                    Ok(())
                })
                // Computed, read-only.
                .reader("getFormattedSalary", ValueType::String, |e: &Employee| {
                    Ok(Value::String(format!("${:.2}", e.salary)))
                })
                .build()
                .expect("employee table")
        })
    }
}

pub fn sample_employee() -> Employee {
    Employee {
        employee_id: Uuid::new_v4(),
        first_name: "Jane".to_string(),
        last_name: "Smith".to_string(),
        salary: 72000.0,
        department: "HR".to_string(),
        hire_date: Utc.with_ymd_and_hms(2018, 6, 1, 0, 0, 0).unwrap(),
        active: true,
    }
}

/// A virtual-pet profile whose age writer enforces the evolution-stage
/// bound carried by the record itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PetProfile {
    pub name: String,
    pub age: i64,
    pub max_stage: i64,
}

impl PetProfile {
    pub fn new(name: &str, age: i64, max_stage: i64) -> Self {
        Self {
            name: name.to_string(),
            age,
            max_stage,
        }
    }
}

impl Record for PetProfile {
    fn descriptors() -> &'static DescriptorTable<Self> {
        static TABLE: OnceLock<DescriptorTable<PetProfile>> = OnceLock::new();
        TABLE.get_or_init(|| {
            DescriptorTable::builder()
                .reader("getName", ValueType::String, |p: &PetProfile| {
                    Ok(Value::String(p.name.clone()))
                })
                .writer("setName", ValueType::String, |p: &mut PetProfile, v| {
                    p.name = v.as_string().unwrap_or_default().to_string();
                    Ok(())
                })
                .reader("getAge", ValueType::Int, |p: &PetProfile| Ok(Value::Int(p.age)))
                .writer("setAge", ValueType::Int, |p: &mut PetProfile, v| {
                    let age = v.as_int().unwrap_or_default();
                    if age < 0 || age > p.max_stage {
                        return Err(ValidationError::OutOfRange {
                            field: "age".to_string(),
                            min: 0.0,
                            max: p.max_stage as f64,
                            actual: age as f64,
                        });
                    }
                    p.age = age;
                    Ok(())
                })
                .build()
                .expect("pet table")
        })
    }
}
