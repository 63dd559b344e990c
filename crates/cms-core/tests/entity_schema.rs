//! JsonSchema validation for the entity types.

use chrono::Utc;
use schemars::schema_for;
use cms_core::entities::{Course, Enrollment, User};
use cms_core::enums::{Category, CourseStatus, SkillLevel, UserRole};

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! validates_against_own_schema {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

validates_against_own_schema!(
    course_schema,
    Course,
    Course {
        id: 7,
        name: "Data Wrangling".into(),
        description: Some("pandas and friends".into()),
        category: Category::DataScience,
        skill_level: SkillLevel::Intermediate,
        status: CourseStatus::Published,
        duration: 0,
        created_at: Utc::now(),
        image: None,
    }
);

validates_against_own_schema!(
    enrollment_schema,
    Enrollment,
    Enrollment {
        id: 1,
        user_id: 2,
        course_id: 7,
        status: "Completed".into(),
        created_at: Utc::now(),
    }
);

validates_against_own_schema!(
    user_schema,
    User,
    User {
        id: 2,
        username: "ada".into(),
        role: UserRole::Student,
    }
);

#[test]
fn category_schema_rejects_slug() {
    let schema = serde_json::to_value(schema_for!(Category)).unwrap();
    let errors = validate_against_schema(&schema, &serde_json::json!("data-science"));
    assert!(!errors.is_empty());
    let errors = validate_against_schema(&schema, &serde_json::json!("Data Science"));
    assert!(errors.is_empty());
}
