#[cfg(test)]
mod tests {
    use ideadash::app::generator::{IdeaForm, IdeaGenerator};
    use pretty_assertions::assert_eq;

    fn clause_position(prompt: &str, clause: &str) -> usize {
        prompt
            .find(clause)
            .unwrap_or_else(|| panic!("clause not found in prompt: {:?}\nprompt: {}", clause, prompt))
    }

    #[test]
    fn test_prompt_always_contains_app_type_and_language() {
        let mut form = IdeaForm::new();
        form.app_type = "Desktop App".to_string();
        form.set_programming_language("Go");

        let prompt = form.assemble_prompt();
        assert!(prompt.contains("Desktop App"));
        assert!(prompt.contains("Go"));
    }

    #[test]
    fn test_empty_form_still_produces_a_prompt() {
        let form = IdeaForm::new();
        let prompt = form.assemble_prompt();

        // Required-by-convention fields interpolate empty rather than failing
        assert!(prompt.contains("create a functional  that"));
        assert!(prompt.contains("The app should be written in "));
        assert!(prompt.contains("5/10"));
        assert!(!prompt.contains("using"));
        assert!(!prompt.contains("architecture"));
        assert!(!prompt.contains("authentication"));
        assert!(!prompt.contains("data storage"));
        assert!(!prompt.contains("target audience"));
    }

    #[test]
    fn test_functionalities_clause_iff_non_empty() {
        let mut form = IdeaForm::new();
        assert!(!form.assemble_prompt().contains("includes"));

        form.set_functionality("Task Management", true);
        form.set_functionality("File Sharing", true);
        let prompt = form.assemble_prompt();
        assert!(prompt.contains("includes Task Management, File Sharing. "));

        // Each selected item appears exactly once
        assert_eq!(prompt.matches("Task Management").count(), 1);
        assert_eq!(prompt.matches("File Sharing").count(), 1);
    }

    #[test]
    fn test_functionalities_preserve_selection_order() {
        let mut form = IdeaForm::new();
        form.set_functionality("Payment Processing", true);
        form.set_functionality("User Management", true);
        form.set_functionality("Data Analytics", true);

        // Selection order, not catalog order
        assert!(form
            .assemble_prompt()
            .contains("includes Payment Processing, User Management, Data Analytics. "));
    }

    #[test]
    fn test_language_change_clears_framework() {
        let mut form = IdeaForm::new();
        form.set_programming_language("JavaScript");
        form.framework = "React".to_string();

        form.set_programming_language("Python");
        assert_eq!(form.framework, "");

        // Setting the same language again is not a change
        form.framework = "Django".to_string();
        form.set_programming_language("Python");
        assert_eq!(form.framework, "Django");
    }

    #[test]
    fn test_auth_clause_iff_enabled() {
        let mut form = IdeaForm::new();
        assert!(!form
            .assemble_prompt()
            .contains("Include user authentication and authorization."));

        form.include_auth = true;
        assert!(form
            .assemble_prompt()
            .contains("Include user authentication and authorization. "));
    }

    #[test]
    fn test_sample_form_assembles_all_clauses_in_order() {
        let form = IdeaForm::sample();
        let prompt = form.assemble_prompt();

        let positions = [
            clause_position(&prompt, "Web App"),
            clause_position(&prompt, "includes User Management, E-commerce."),
            clause_position(&prompt, "written in JavaScript"),
            clause_position(&prompt, "using React framework"),
            clause_position(&prompt, "follow Microservices architecture."),
            clause_position(&prompt, "complexity level is 7/10."),
            clause_position(&prompt, "Include user authentication and authorization."),
            clause_position(&prompt, "Use SQL Database for data storage."),
            clause_position(&prompt, "The target audience is General Public."),
        ];

        for window in positions.windows(2) {
            assert!(
                window[0] < window[1],
                "clauses out of order in prompt: {}",
                prompt
            );
        }
    }

    #[test]
    fn test_url_clause_appears_after_audience() {
        let mut form = IdeaForm::sample();
        form.input_urls = vec![
            "https://example.com/spec".to_string(),
            "https://example.com/mockups".to_string(),
        ];

        let prompt = form.assemble_prompt();
        let audience_pos = clause_position(&prompt, "target audience");
        let urls_pos = clause_position(
            &prompt,
            "Analyze the following URLs: https://example.com/spec, https://example.com/mockups. ",
        );
        assert!(audience_pos < urls_pos);
    }

    #[test]
    fn test_generate_appends_history_in_call_order() {
        let mut generator = IdeaGenerator::new();
        generator.form.app_type = "IoT App".to_string();

        let first = generator.generate();
        generator.form.app_type = "AI/ML App".to_string();
        let second = generator.generate();
        // Same state twice still records a new entry
        let third = generator.generate();

        assert_eq!(generator.history.len(), 3);
        assert_eq!(generator.history[0].prompt, first);
        assert_eq!(generator.history[1].prompt, second);
        assert_eq!(generator.history[2].prompt, third);
        assert_eq!(second, third);
        assert!(generator.history[0].timestamp <= generator.history[1].timestamp);
        assert!(generator.history[1].timestamp <= generator.history[2].timestamp);
    }

    #[test]
    fn test_apply_config_preserves_session_only_state() {
        let mut form = IdeaForm::new();
        form.idea_input = "a recipe planner".to_string();
        form.input_urls = vec!["https://example.com".to_string()];

        form.apply_config(IdeaForm::sample());

        assert_eq!(form.app_type, "Web App");
        assert_eq!(form.complexity, 7);
        assert_eq!(form.idea_input, "a recipe planner");
        assert_eq!(form.input_urls, vec!["https://example.com".to_string()]);
    }
}
