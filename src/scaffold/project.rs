use crate::scaffold::interview::ProjectAnswers;

/// The fully derived project identity handed to the template pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub name: String,
    pub slug: String,
    pub camel_name: String,
    pub description: String,
    pub homepage: String,
    pub license: String,
    pub github_username: String,
    pub repo_url: String,
    pub author_name: String,
    pub author_email: String,
    pub author_url: String,
    pub year: i32,
}

impl Project {
    /// Apply the naming rules and fallbacks to a set of interview answers.
    ///
    /// A blank GitHub username degrades the repository URL to `user/repo`,
    /// a blank homepage falls back to the repository URL, and a blank
    /// license falls back to MIT.
    pub fn from_answers(answers: &ProjectAnswers, year: i32) -> Self {
        let slug = match slugify(&answers.name) {
            s if s.is_empty() => String::from("app"),
            s => s,
        };
        let camel_name = camelize(&slug);

        let (github_username, repo_url) = if answers.github_username.is_empty() {
            (String::from("user"), String::from("user/repo"))
        } else {
            (
                answers.github_username.clone(),
                format!("https://github.com/{}/{}", answers.github_username, slug),
            )
        };

        let homepage = if answers.homepage.is_empty() {
            repo_url.clone()
        } else {
            answers.homepage.clone()
        };

        let license = if answers.license.is_empty() {
            String::from("MIT")
        } else {
            answers.license.clone()
        };

        Self {
            name: answers.name.clone(),
            slug,
            camel_name,
            description: answers.description.clone(),
            homepage,
            license,
            github_username,
            repo_url,
            author_name: answers.author_name.clone(),
            author_email: answers.author_email.clone(),
            author_url: answers.author_url.clone(),
            year,
        }
    }
}

/// Lowercase the name, fold accented Latin letters to their base letter, and
/// map every remaining run of non-alphanumeric characters to a single hyphen,
/// trimming hyphens at both ends.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars().flat_map(char::to_lowercase) {
        let ch = fold_diacritic(ch);
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

fn fold_diacritic(ch: char) -> char {
    match ch {
        'à' | 'á' | 'ä' | 'â' | 'ã' | 'å' | 'æ' | 'ą' | 'ă' => 'a',
        'ç' | 'ć' | 'č' | 'ĉ' => 'c',
        'è' | 'é' | 'ë' | 'ê' | 'ę' => 'e',
        'ĝ' => 'g',
        'ĥ' => 'h',
        'ì' | 'í' | 'ï' | 'î' => 'i',
        'ĵ' => 'j',
        'ł' | 'ľ' => 'l',
        'ń' | 'ň' | 'ñ' => 'n',
        'ò' | 'ó' | 'ö' | 'ô' | 'õ' | 'ő' | 'ø' | 'ð' => 'o',
        'ś' | 'š' | 'ŝ' | 'ș' => 's',
        'ť' | 'ț' => 't',
        'ù' | 'ú' | 'ü' | 'û' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

/// Turn a slug into an identifier by upper-casing the character after each
/// hyphen run.
pub fn camelize(slug: &str) -> String {
    let mut out = String::with_capacity(slug.len());
    let mut upper_next = false;
    for ch in slug.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> ProjectAnswers {
        ProjectAnswers {
            name: "Demo Service".to_string(),
            description: "The best project ever.".to_string(),
            homepage: String::new(),
            license: "MIT".to_string(),
            github_username: "octocat".to_string(),
            author_name: "Jane Doe".to_string(),
            author_email: "jane@example.com".to_string(),
            author_url: "https://example.com".to_string(),
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Demo Service"), "demo-service");
        assert_eq!(slugify("My Cool App!"), "my-cool-app");
        assert_eq!(slugify("  hello__world  "), "hello-world");
        assert_eq!(slugify("ALLCAPS"), "allcaps");
        assert_eq!(slugify("v2.0-beta"), "v2-0-beta");
        assert_eq!(slugify("Café Señor"), "cafe-senor");
        assert_eq!(slugify("Bücher Über Øl"), "bucher-uber-ol");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_camelize() {
        assert_eq!(camelize("my-cool-app"), "myCoolApp");
        assert_eq!(camelize("demo-service"), "demoService");
        assert_eq!(camelize("a--b"), "aB");
        assert_eq!(camelize("app"), "app");
    }

    #[test]
    fn test_from_answers_derives_identity() {
        let project = Project::from_answers(&answers(), 2026);
        assert_eq!(project.slug, "demo-service");
        assert_eq!(project.camel_name, "demoService");
        assert_eq!(project.repo_url, "https://github.com/octocat/demo-service");
        assert_eq!(project.homepage, "https://github.com/octocat/demo-service");
        assert_eq!(project.year, 2026);
    }

    #[test]
    fn test_from_answers_without_github_username() {
        let mut input = answers();
        input.github_username = String::new();

        let project = Project::from_answers(&input, 2026);
        assert_eq!(project.github_username, "user");
        assert_eq!(project.repo_url, "user/repo");
        assert_eq!(project.homepage, "user/repo");
    }

    #[test]
    fn test_from_answers_explicit_homepage_wins() {
        let mut input = answers();
        input.homepage = "https://demo.example.com".to_string();

        let project = Project::from_answers(&input, 2026);
        assert_eq!(project.homepage, "https://demo.example.com");
    }

    #[test]
    fn test_from_answers_blank_license_falls_back_to_mit() {
        let mut input = answers();
        input.license = String::new();

        let project = Project::from_answers(&input, 2026);
        assert_eq!(project.license, "MIT");
    }

    #[test]
    fn test_from_answers_unusable_name_falls_back_to_app() {
        let mut input = answers();
        input.name = "!!!".to_string();

        let project = Project::from_answers(&input, 2026);
        assert_eq!(project.slug, "app");
        assert_eq!(project.camel_name, "app");
    }
}
