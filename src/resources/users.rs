use crate::models::User;
use crate::render::{Card, Cell, Tone};
use crate::resource::ResourceSpec;

/// Users view
pub fn users() -> ResourceSpec<User> {
    ResourceSpec::<User>::builder("users")
        .subtitle("OctoFit community members")
        .total_label("Total Members")
        .column("#", |position, _| {
            Cell::badge(position.to_string(), Tone::Secondary)
        })
        .column("Avatar", |_, u: &User| avatar(u))
        .column("Username", |_, u: &User| {
            Cell::strong(u.username.as_deref().unwrap_or("No username"))
        })
        .column("Name", |_, u: &User| match u.full_name() {
            Some(name) => Cell::text(name),
            None => Cell::muted("Name not provided"),
        })
        .column("Email", |_, u: &User| match &u.email {
            Some(email) => Cell::Mailto {
                address: email.clone(),
            },
            None => Cell::muted("No email"),
        })
        .column("Status", |_, _| Cell::badge("Active", Tone::Success))
        .card(|position, u: &User| {
            let title = u
                .username
                .clone()
                .or_else(|| u.first_name.clone())
                .unwrap_or_else(|| format!("User {}", position));
            Card::new(title)
                .line(avatar(u))
                .line(Cell::muted(u.email.as_deref().unwrap_or("No email provided")))
                .line(Cell::muted(
                    u.full_name().unwrap_or_else(|| "Name not provided".to_string()),
                ))
                .badge(Cell::badge("Active Member", Tone::Success))
        })
        .empty_state(
            "No Users Found",
            "Register to become part of the OctoFit community!",
            "Register Now",
        )
        .build()
}

fn avatar(u: &User) -> Cell {
    Cell::Avatar {
        initial: u.initial().unwrap_or('U'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::parse_items;

    #[test]
    fn test_complete_user_row() {
        let items: Vec<User> = parse_items(
            r#"[{"username": "thundergod", "email": "thor@mhigh.edu", "first_name": "Thor", "last_name": "Odinson"}]"#,
        )
        .unwrap();
        let row = &users().table(&items).rows[0];

        assert_eq!(row.cells[1], Cell::Avatar { initial: 'T' });
        assert_eq!(row.cells[2], Cell::strong("thundergod"));
        assert_eq!(row.cells[3], Cell::text("Thor Odinson"));
        assert_eq!(
            row.cells[4],
            Cell::Mailto {
                address: "thor@mhigh.edu".to_string()
            }
        );
        assert_eq!(row.cells[5], Cell::badge("Active", Tone::Success));
    }

    #[test]
    fn test_sparse_users() {
        let items: Vec<User> =
            parse_items(r#"[{"email": "quiet@mhigh.edu", "first_name": "Q"}, {}]"#).unwrap();
        let spec = users();
        let table = spec.table(&items);

        let first = &table.rows[0];
        assert_eq!(first.cells[1], Cell::Avatar { initial: 'Q' });
        assert_eq!(first.cells[2], Cell::strong("No username"));
        assert_eq!(first.cells[3], Cell::muted("Name not provided"));

        let second = &table.rows[1];
        assert_eq!(second.cells[1], Cell::Avatar { initial: 'U' });
        assert_eq!(second.cells[4], Cell::muted("No email"));

        let cards = spec.cards(&items);
        assert_eq!(cards[0].title, "Q");
        assert_eq!(cards[1].title, "User 2");
        assert_eq!(cards[1].fields[1].value, Cell::muted("No email provided"));
        assert_eq!(spec.total_label(), "Total Members");
    }
}
