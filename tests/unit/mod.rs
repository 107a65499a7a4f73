mod ambiguity;
mod concurrency;
mod differential;
mod lifting;
mod properties;
mod scenarios;
mod user_defined;
