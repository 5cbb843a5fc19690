// ChromeLike services
// Services are stateless helpers around the shell: configuration loading.

pub mod config_loader;
