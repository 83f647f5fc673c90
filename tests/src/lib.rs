//! Cross-crate tests of `lanmap`. Nothing here touches the network.

#[cfg(test)]
mod discovery;
#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod subnet;
