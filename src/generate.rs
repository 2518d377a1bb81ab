//! Batch generation driver: validate, quantize, render, write.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ThemeError};
use crate::flavor::Flavor;
use crate::template::Template;

/// Result of generating one flavor's color scheme.
#[derive(Debug)]
pub struct Outcome {
    pub flavor: &'static str,
    pub result: Result<PathBuf>,
}

/// Generate a color scheme for every flavor. One flavor failing does not
/// stop the others; the caller inspects the outcomes. Failure to create
/// the output directory fails the whole batch.
pub fn generate_all(
    template: &Template,
    flavors: &[Flavor],
    output_dir: &Path,
) -> Result<Vec<Outcome>> {
    fs::create_dir_all(output_dir).map_err(|e| ThemeError::WriteError {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    Ok(flavors
        .iter()
        .map(|flavor| Outcome {
            flavor: flavor.name,
            result: generate_one(template, flavor, output_dir),
        })
        .collect())
}

/// Generate one flavor. All validation happens before anything is
/// written, so a failing flavor leaves no partial output behind.
pub fn generate_one(template: &Template, flavor: &Flavor, output_dir: &Path) -> Result<PathBuf> {
    let key = flavor.key()?;
    let class_name = flavor.class_name()?;

    let colors = flavor.quantize()?;
    let missing: Vec<String> = template
        .required_keys()
        .into_iter()
        .filter(|k| !colors.contains_key(k))
        .collect();
    if !missing.is_empty() {
        return Err(ThemeError::MissingColorKeys {
            flavor: flavor.name.to_string(),
            keys: missing,
        });
    }

    let rendered = template.render(&colors, &class_name);
    let path = output_dir.join(format!("catppuccin_{key}.py"));
    fs::write(&path, rendered).map_err(|e| ThemeError::WriteError {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor;

    const TEMPLATE: &str = "\
RED = \"red\"
BASE = \"base\"

class BaseConfig(ColorScheme):
    progress_bar_color = BLUE
";

    #[test]
    fn writes_one_file_per_flavor() {
        let dir = tempfile::tempdir().unwrap();
        let template = Template::new(TEMPLATE);
        let outcomes =
            generate_all(&template, flavor::all_flavors(), dir.path()).unwrap();
        assert_eq!(outcomes.len(), 4);
        for outcome in &outcomes {
            let path = outcome.result.as_ref().unwrap();
            assert!(path.exists(), "missing output for {}", outcome.flavor);
        }
        assert!(dir.path().join("catppuccin_latte.py").exists());
        assert!(dir.path().join("catppuccin_frappe.py").exists());
        assert!(dir.path().join("catppuccin_macchiato.py").exists());
        assert!(dir.path().join("catppuccin_mocha.py").exists());
    }

    #[test]
    fn rendered_output_substitutes_colors_and_class() {
        let dir = tempfile::tempdir().unwrap();
        let template = Template::new(TEMPLATE);
        let path = generate_one(&template, &flavor::LATTE, dir.path()).unwrap();
        let out = fs::read_to_string(path).unwrap();
        assert!(out.contains("class CatppuccinLatte(ColorScheme):"));
        assert!(!out.contains("BaseConfig"));
        assert!(!out.contains("\"red\""));
        let red_index = crate::xterm::hex_to_index("#D20F39").unwrap();
        assert!(out.contains(&format!("RED = \"{red_index}\"")));
    }

    #[test]
    fn missing_key_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let template = Template::new("TEAL = \"teal\"\nclass BaseConfig: pass\n");
        let flavor = Flavor {
            name: "Partial",
            colors: &[("red", "#ff0000")],
        };
        let err = generate_one(&template, &flavor, dir.path()).unwrap_err();
        match err {
            ThemeError::MissingColorKeys { flavor, keys } => {
                assert_eq!(flavor, "Partial");
                assert_eq!(keys, ["teal"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(
            fs::read_dir(dir.path()).unwrap().next().is_none(),
            "no output should be written for a failing flavor"
        );
    }

    #[test]
    fn one_failing_flavor_does_not_stop_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let template = Template::new("TEAL = \"teal\"\nclass BaseConfig: pass\n");
        let broken = Flavor {
            name: "Broken",
            colors: &[("red", "#ff0000")],
        };
        let flavors = [broken, flavor::LATTE];
        let outcomes = generate_all(&template, &flavors, dir.path()).unwrap();
        assert!(outcomes[0].result.is_err());
        assert!(outcomes[1].result.is_ok());
        assert!(dir.path().join("catppuccin_latte.py").exists());
    }

    #[test]
    fn generation_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let template = Template::new(TEMPLATE);
        let first = generate_one(&template, &flavor::MOCHA, dir.path()).unwrap();
        let first_bytes = fs::read(&first).unwrap();
        let second = generate_one(&template, &flavor::MOCHA, dir.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first_bytes, fs::read(&second).unwrap());
    }

    #[test]
    fn invalid_flavor_name_surfaces() {
        let dir = tempfile::tempdir().unwrap();
        let template = Template::new(TEMPLATE);
        let flavor = Flavor {
            name: "",
            colors: &[],
        };
        assert!(matches!(
            generate_one(&template, &flavor, dir.path()),
            Err(ThemeError::InvalidFlavorName(_))
        ));
    }
}
