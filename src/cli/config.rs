//! Configuration file of the command line tool.

use crate::error::{Error, Result};
use crate::export::Exporter;
use crate::image::Color;
use crate::style::{StyleBook, StyleName, StyleOverride};
use crate::text::FontCatalog;

use serde::{de, Deserialize, Deserializer};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    pub font: Option<FontConfig>,
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub style: HashMap<String, StyleOverride>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutputConfig {
    pub dir: Option<PathBuf>,
    #[serde(default)]
    pub styles: Vec<StyleName>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FontConfig {
    /// Family list used by every style, e.g. `"Inter, sans-serif"`.
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PreviewConfig {
    /// A color, or `"none"` to keep transparent previews transparent.
    #[serde(default = "default_backdrop", deserialize_with = "backdrop_or_none")]
    pub backdrop: Option<Color>,
    pub scale: Option<f64>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            backdrop: default_backdrop(),
            scale: None,
        }
    }
}

fn default_backdrop() -> Option<Color> {
    Some(crate::export::PREVIEW_BACKDROP)
}

fn backdrop_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<Color>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.trim().eq_ignore_ascii_case("none") {
        Ok(None)
    } else {
        value.parse().map(Some).map_err(de::Error::custom)
    }
}

impl Config {
    pub const LOCAL_FILE: &'static str = "linkly.toml";

    /// Opens `path` if given, else the first existing of `./linkly.toml`
    /// and `$HOME/.linkly/config.toml`. Without any file, defaults apply.
    pub fn find(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::open(&path);
        }
        let local = PathBuf::from(Self::LOCAL_FILE);
        if local.is_file() {
            return Self::open(&local);
        }
        let mut home = Self::config_folder()?;
        home.push("config.toml");
        if home.is_file() {
            Self::open(&home)
        } else {
            Ok(Self::default())
        }
    }

    pub fn open(path: &impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::config_open(path, e))?;
        Self::parse(&content).map_err(|e| match e {
            Error::ConfigDeser(_, msg) => Error::config_deser(path, msg),
            e => e,
        })
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config_deser("<config>", e))
    }

    fn config_folder() -> Result<PathBuf> {
        let home = std::env::var("HOME").map_err(|_| Error::no_env_variable("HOME"))?;
        let mut home = PathBuf::from(home);
        home.push(".linkly");
        Ok(home)
    }

    pub fn overrides(&self) -> Result<Vec<(StyleName, &StyleOverride)>> {
        self.style
            .iter()
            .map(|(name, o)| Ok((name.parse()?, o)))
            .collect()
    }

    /// Builds the style book, checking a configured font against the
    /// installed families.
    pub fn style_book(&self, fonts: Option<&FontCatalog>) -> Result<StyleBook> {
        let mut book = StyleBook::builtin();
        if let Some(font) = &self.font {
            if let Some(catalog) = fonts {
                catalog.check(&font.name)?;
            }
            book = book.with_family(&font.name);
        }
        for (name, o) in self.overrides()? {
            book = book.with_override(name, o);
        }
        Ok(book)
    }

    pub fn exporter(&self, fonts: Option<&FontCatalog>) -> Result<Exporter> {
        let mut exporter =
            Exporter::new(self.style_book(fonts)?).with_preview_backdrop(self.preview.backdrop);
        if let Some(scale) = self.preview.scale {
            exporter = exporter.with_preview_scale(scale);
        }
        Ok(exporter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config = Config::parse(
            r##"
            [output]
            dir = "cards"
            styles = ["bold", "story"]

            [font]
            name = "Inter, sans-serif"

            [preview]
            backdrop = "#202020"

            [style.bold]
            text = "#FFEEDD"
            accent = "#FF0000"
            "##,
        )
        .unwrap();
        assert_eq!(config.output.dir, Some(PathBuf::from("cards")));
        assert_eq!(config.output.styles, [StyleName::Bold, StyleName::Story]);
        assert_eq!(config.preview.backdrop, Some(Color::rgb(0x20, 0x20, 0x20)));

        let book = config.style_book(None).unwrap();
        let bold = book.get(StyleName::Bold);
        assert_eq!(bold.family, "Inter, sans-serif");
        assert_eq!(bold.text.title.color, Color::rgb(0xFF, 0xEE, 0xDD));
        assert_eq!(bold.text.brand.color, Color::rgb(0xFF, 0, 0));
        assert_eq!(book.get(StyleName::Fire).family, "Inter, sans-serif");
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert!(config.output.dir.is_none());
        assert!(config.output.styles.is_empty());
        assert_eq!(config.preview.backdrop, default_backdrop());
        assert!(config.exporter(None).is_ok());
    }

    #[test]
    fn backdrop_can_be_disabled() {
        let config = Config::parse("[preview]\nbackdrop = \"none\"\n").unwrap();
        assert_eq!(config.preview.backdrop, None);
        let config = Config::parse("[preview]\nscale = 0.5\n").unwrap();
        assert_eq!(config.preview.backdrop, default_backdrop());
        assert!(Config::parse("[preview]\nbackdrop = \"grey\"\n").is_err());
    }

    #[test]
    fn unknown_style_table_is_rejected() {
        let config = Config::parse("[style.neon]\ntext = \"#FFFFFF\"\n").unwrap();
        assert!(matches!(
            config.style_book(None),
            Err(Error::UnknownStyle(_))
        ));
    }

    #[test]
    fn open_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linkly.toml");
        fs::write(&path, "[output]\nstyles = 3\n").unwrap();
        match Config::open(&path) {
            Err(Error::ConfigDeser(p, _)) => assert!(p.ends_with("linkly.toml")),
            other => panic!("unexpected {other:?}"),
        }
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            Config::open(&missing),
            Err(Error::ConfigOpen(..))
        ));
    }
}
