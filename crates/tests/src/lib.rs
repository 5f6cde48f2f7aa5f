#[cfg(test)]
mod common;

#[cfg(test)]
mod session_flow_tests;

#[cfg(test)]
mod admin_flow_tests;

#[cfg(test)]
mod class_flow_tests;

#[cfg(test)]
mod attendance_flow_tests;

#[cfg(test)]
mod config_tests;
