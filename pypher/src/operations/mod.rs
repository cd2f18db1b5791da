//! High-level operations composed from the path, elicitation and
//! serialization layers.
//!
//! # Examples
//!
//! ```no_run
//! use pypher::config::ConfigBuilder;
//! use pypher::elicit::LinePrompter;
//! use pypher::operations::{new_project, NewProjectOptions};
//! use pypher::{EnvironmentContext, ProjectPath};
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let project = ProjectPath::resolve("~/code/my-app").unwrap();
//! let options = NewProjectOptions::new(project);
//! options.check_preconditions().unwrap();
//!
//! let env = EnvironmentContext::detect(config.python()).unwrap();
//! let stdin = std::io::stdin();
//! let mut prompter = LinePrompter::new(stdin.lock(), std::io::stdout());
//! let result = new_project(&options, &env, &config, &mut prompter).unwrap();
//! println!("wrote {}", result.descriptor_path.display());
//! ```

pub mod new_project;

pub use new_project::{new_project, NewProjectOptions, NewProjectResult};
