pub mod resolver;

pub use resolver::{DeploymentMode, DeploymentResolver, MODE_ENV, SMTP_HOST_ENV};
