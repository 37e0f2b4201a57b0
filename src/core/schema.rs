use crate::core::alias::FieldAliases;
use crate::core::coerce;
use crate::core::reader::FieldReader;
use crate::core::rules::UserRules;
use crate::domain::model::{Address, User};
use crate::domain::ports::Model;

impl Model for Address {
    const TITLE: &'static str = "Address";
    const ALIASES: FieldAliases = FieldAliases::NONE;

    fn validate_fields(reader: &mut FieldReader<'_>) -> Option<Self> {
        let street = reader.required("street", coerce::to_text);
        let city = reader.required("city", coerce::to_text);
        let pincode = reader.required("pincode", coerce::to_int);

        Some(Address {
            street: street?,
            city: city?,
            pincode: pincode?,
        })
    }
}

impl Model for User {
    const TITLE: &'static str = "User";
    const ALIASES: FieldAliases = FieldAliases::new(&[("full_name", "fullName")]);

    fn validate_fields(reader: &mut FieldReader<'_>) -> Option<Self> {
        let first_name = reader.optional("first_name", coerce::to_text);
        let last_name = reader.optional("last_name", coerce::to_text);
        let email = reader.required("email", coerce::to_text);
        let phone = reader.optional("phone", coerce::to_int);

        let age = reader.required("age", coerce::to_int);
        let registered_at = reader.required("registered_at", coerce::to_date);
        let full_name = reader.required("full_name", coerce::to_text);
        let skills = reader.required("skills", coerce::to_text_list);
        let address = reader.nested::<Address>("address");

        let rules = UserRules { age, skills };
        if !reader.enforce(&rules) {
            return None;
        }
        let UserRules { age, skills } = rules;

        Some(User {
            first_name: first_name?,
            last_name: last_name?,
            email: email?,
            phone: phone?,
            age: age?,
            registered_at: registered_at?,
            full_name: full_name?,
            skills: skills?,
            address: address?,
        })
    }
}
