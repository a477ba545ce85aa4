#[cfg(test)]
mod common;

#[cfg(test)]
mod health_tests;

#[cfg(test)]
mod entity_tests;

#[cfg(test)]
mod judge_dashboard_tests;

#[cfg(test)]
mod lawyer_dashboard_tests;

#[cfg(test)]
mod admin_dashboard_tests;

#[cfg(test)]
mod dashboard_dispatch_tests;


#[cfg(test)]
mod note_tests;

#[cfg(test)]
mod unavailable_tests;
