/// A SKILL.md with the given header fields and a body of `body_lines` lines.
pub fn skill(name: &str, description: &str, body_lines: usize) -> String {
    let mut content = format!("---\nname: {}\ndescription: {}\n---\n", name, description);
    for i in 0..body_lines {
        content.push_str(&format!("Step {} of the workflow.\n", i + 1));
    }
    content
}

/// A SKILL.md with a valid header and the given body.
pub fn skill_with_body(body: &str) -> String {
    format!(
        "---\nname: pdf-forms\ndescription: Fills PDF forms. Use when the user mentions PDF forms.\n---\n{}",
        body
    )
}

/// The clean package from the reference scenario.
pub fn clean_skill() -> String {
    skill("my-skill", "\"Does X. Use when Y.\"", 10)
}
