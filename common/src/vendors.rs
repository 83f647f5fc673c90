use pnet::datalink::MacAddr;

/// Looks up the hardware vendor behind a MAC address.
pub trait VendorRepository {
    fn get_vendor(&self, mac: MacAddr) -> Option<String>;
}
