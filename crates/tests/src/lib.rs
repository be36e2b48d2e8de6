#[cfg(test)]
mod common;

#[cfg(test)]
mod collection_tests;

#[cfg(test)]
mod detail_tests;

#[cfg(test)]
mod error_mapping_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod gate_tests;

#[cfg(test)]
mod filter_tests;
