//! Member collection

use crate::models::member::{CreateMember, Member, UpdateMember};

use super::store::Resource;

impl Resource for Member {
    type Draft = CreateMember;
    type Patch = UpdateMember;

    const NAME: &'static str = "Member";

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: CreateMember) -> Self {
        Self {
            id,
            name: draft.name.unwrap_or_default(),
            email: draft.email.unwrap_or_default(),
        }
    }

    fn apply(&mut self, patch: UpdateMember) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }

    fn text_field(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            _ => None,
        }
    }
}

pub fn sample_members() -> Vec<Member> {
    vec![
        Member {
            id: 1,
            name: "Chandan".to_string(),
            email: "chandan@gmail.com".to_string(),
        },
        Member {
            id: 2,
            name: "Prayash".to_string(),
            email: "vinayakppj123@gmail.com".to_string(),
        },
    ]
}
