//! Rendering of the embedded boilerplate templates.
//!
//! Every generated project gets the same five files; only the values
//! interpolated into them change. The templates are compiled into the
//! binary and rendered with MiniJinja.

use minijinja::Environment;
use serde::Serialize;

use crate::error::Result;

const MAIN_GO: &str = r#"package main

import "fmt"

func main() {
	fmt.Println("Project {{ name }} initialized.")
}
"#;

const GO_MOD: &str = "module github.com/{{ user }}/{{ slug }}

go 1.23
";

const MAKEFILE: &str = "run:
	go run ./cmd/main.go

build:
	go build -o bin/app ./cmd/main.go

test:
	go test ./...
";

// The tag lines end with two spaces, the markdown hard line break.
const README: &str = "# {{ name }}\n\n{{ description }}\n\n**Type:** {{ type }}  \n**Domain:** {{ domain }}  \n**Created:** {{ created }}  \n";

const GITIGNORE: &str = "bin/
*.log
*.tmp
.env
";

/// Boilerplate files written into every new project, as
/// `(relative path, template)` pairs.
pub const BOILERPLATE_FILES: &[(&str, &str)] = &[
    ("cmd/main.go", MAIN_GO),
    ("go.mod", GO_MOD),
    ("Makefile", MAKEFILE),
    ("README.md", README),
    (".gitignore", GITIGNORE),
];

/// Values interpolated into the boilerplate templates.
#[derive(Debug, Serialize)]
pub struct BoilerplateContext {
    /// Upper-case identifier, e.g. `ARES-LAB-API`.
    pub name: String,
    /// Lower-case identifier, e.g. `ares-lab-api`.
    pub slug: String,
    /// OS login, used for the generated module path.
    pub user: String,
    /// Free-text description from `--desc`, possibly empty.
    pub description: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub domain: String,
    /// Creation date, `YYYY-MM-DD`.
    pub created: String,
}

/// MiniJinja environment preloaded with the boilerplate templates.
pub struct BoilerplateRenderer {
    env: Environment<'static>,
}

impl BoilerplateRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        for &(name, template) in BOILERPLATE_FILES {
            env.add_template(name, template)?;
        }
        Ok(Self { env })
    }

    /// Renders the template registered under `name` with the given context.
    pub fn render(&self, name: &str, context: &BoilerplateContext) -> Result<String> {
        let template = self.env.get_template(name)?;
        Ok(template.render(context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> BoilerplateContext {
        BoilerplateContext {
            name: "ARES-LAB-API".to_string(),
            slug: "ares-lab-api".to_string(),
            user: "tester".to_string(),
            description: "Experimental API playground".to_string(),
            type_tag: "LAB".to_string(),
            domain: "API".to_string(),
            created: "2026-08-24".to_string(),
        }
    }

    #[test]
    fn readme_embeds_identifier_and_tags() {
        let renderer = BoilerplateRenderer::new().unwrap();
        let readme = renderer.render("README.md", &context()).unwrap();
        assert!(readme.starts_with("# ARES-LAB-API\n"));
        assert!(readme.contains("Experimental API playground"));
        assert!(readme.contains("**Type:** LAB"));
        assert!(readme.contains("**Domain:** API"));
        assert!(readme.contains("**Created:** 2026-08-24"));
    }

    #[test]
    fn go_mod_uses_login_and_slug() {
        let renderer = BoilerplateRenderer::new().unwrap();
        let go_mod = renderer.render("go.mod", &context()).unwrap();
        assert_eq!(go_mod, "module github.com/tester/ares-lab-api\n\ngo 1.23\n");
    }

    #[test]
    fn main_go_prints_initialized_message() {
        let renderer = BoilerplateRenderer::new().unwrap();
        let main_go = renderer.render("cmd/main.go", &context()).unwrap();
        assert!(main_go.contains(r#"fmt.Println("Project ARES-LAB-API initialized.")"#));
    }

    #[test]
    fn makefile_targets_are_fixed() {
        let renderer = BoilerplateRenderer::new().unwrap();
        let makefile = renderer.render("Makefile", &context()).unwrap();
        for target in ["run:", "build:", "test:"] {
            assert!(makefile.contains(target));
        }
    }

    #[test]
    fn gitignore_has_four_patterns() {
        let renderer = BoilerplateRenderer::new().unwrap();
        let gitignore = renderer.render(".gitignore", &context()).unwrap();
        assert_eq!(gitignore, "bin/\n*.log\n*.tmp\n.env\n");
    }
}
