//! Tool registry for lookup by key

use std::collections::HashMap;

use super::Tool;

/// Registry of all known tools
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<Tool>,
    by_key: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create a new registry with the given tools
    pub fn new(tools: Vec<Tool>) -> Self {
        let by_key: HashMap<String, usize> = tools
            .iter()
            .enumerate()
            .map(|(idx, t)| (t.key.clone(), idx))
            .collect();

        Self { tools, by_key }
    }

    /// Get a tool by its key
    pub fn get(&self, key: &str) -> Option<&Tool> {
        self.by_key.get(key).and_then(|&idx| self.tools.get(idx))
    }

    /// All tool keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.by_key.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Get all tools in the registry
    pub fn all(&self) -> &[Tool] {
        &self.tools
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::Conventions;

    fn tool(key: &str) -> Tool {
        Tool::new(
            key,
            key.to_uppercase(),
            format!("/home/u/.{key}"),
            format!(".{key}"),
            Conventions::new("commands/{name}.md", "skills/{name}/SKILL.md"),
        )
    }

    #[test]
    fn test_get_by_key() {
        let registry = ToolRegistry::new(vec![tool("codex"), tool("claude")]);
        assert_eq!(registry.get("claude").unwrap().name, "CLAUDE");
        assert!(registry.get("cursor").is_none());
    }

    #[test]
    fn test_keys_are_sorted() {
        let registry = ToolRegistry::new(vec![tool("opencode"), tool("claude"), tool("codex")]);
        assert_eq!(registry.keys(), vec!["claude", "codex", "opencode"]);
        assert_eq!(registry.all().len(), 3);
    }
}
