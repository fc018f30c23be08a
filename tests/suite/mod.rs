mod actions;
mod form_flow;
mod scenarios;
