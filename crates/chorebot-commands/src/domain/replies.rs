//! Reply texts sent back to the group.

/// Reply to a "whose turn" query.
#[must_use]
pub fn whose_turn(current: &str) -> String {
    format!("🚨 A vez de levar o lixo é do(a) *{current}*!")
}

/// Reply after someone reports the chore as done.
#[must_use]
pub fn chore_done(completed_by: &str, now_current: &str) -> String {
    format!(
        "✅ Lixo levado por *{completed_by}*! Parabéns! \n👉 O próximo(a) agora é o(a) *{now_current}*."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whose_turn_names_the_current_participant() {
        assert_eq!(whose_turn("Ana"), "🚨 A vez de levar o lixo é do(a) *Ana*!");
    }

    #[test]
    fn test_chore_done_names_both_participants() {
        let reply = chore_done("Ana", "Bruno");

        assert!(reply.starts_with("✅ Lixo levado por *Ana*!"));
        assert!(reply.ends_with("O próximo(a) agora é o(a) *Bruno*."));
        assert!(reply.contains('\n'));
    }
}
