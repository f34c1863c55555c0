mod public_user;
mod user;
