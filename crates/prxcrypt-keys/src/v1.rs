//! Variant-1 key catalog.
//!
//! Each entry holds 144 bytes of key material stored as 36 little-endian
//! words, a primary engine code and an optional second code (`0` when unused).
//! When the second code is set, the signature block is passed through the
//! engine once more before the main unwrap.

use crate::KeyRecord;

/// A Variant-1 catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TagInfo {
    /// Module tag.
    pub tag: u32,
    /// Key material, 36 words.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub key: &'static [u32; 36],
    /// Primary engine code.
    pub code: u8,
    /// Second engine code, `0` if the entry has none.
    pub code_extra: u8,
    /// Short description.
    pub label: &'static str,
}

impl TagInfo {
    pub const fn new(
        tag: u32,
        key: &'static [u32; 36],
        code: u8,
        code_extra: u8,
        label: &'static str,
    ) -> Self {
        Self {
            tag,
            key,
            code,
            code_extra,
            label,
        }
    }

    /// The key material as 144 little-endian bytes.
    pub fn key_bytes(&self) -> [u8; 0x90] {
        let mut out = [0u8; 0x90];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.key) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }

    pub fn has_extra_code(&self) -> bool {
        self.code_extra != 0
    }
}

impl KeyRecord for TagInfo {
    fn tag(&self) -> u32 {
        self.tag
    }

    fn label(&self) -> &'static str {
        self.label
    }

    fn required_codes(&self) -> impl Iterator<Item = u8> + '_ {
        std::iter::once(self.code).chain(self.has_extra_code().then_some(self.code_extra))
    }
}

/// Find the first entry carrying `tag`.
pub fn lookup(tag: u32) -> Option<&'static TagInfo> {
    TAGS.iter().find(|t| t.tag == tag)
}

/// All entries in catalog order.
pub fn iter() -> impl Iterator<Item = &'static TagInfo> {
    TAGS.iter()
}

/// Tags present more than once. Only the first occurrence is reachable by
/// [`lookup`].
pub fn duplicate_tags() -> Vec<u32> {
    crate::duplicates(TAGS.iter().map(|t| t.tag))
}

const KEY_0: [u32; 36] = [
    0x7B21F3BE, 0x299C5E1D, 0x1C9C5E71, 0x96CB4645, 0x3C9B1BE0, 0xEB85DE3D,
    0x4A7F2022, 0xC2206EAA, 0xD50B3265, 0x55770567, 0x3C080840, 0x981D55F2,
    0x5FD8F6F3, 0xEE8EB0C5, 0x944D8152, 0xF8278651, 0x2705BAFA, 0x8420E533,
    0x27154AE9, 0x4819AA32, 0x59A3AA40, 0x2CB3CF65, 0xF274466D, 0x3A655605,
    0x21B0F88F, 0xC5B18D26, 0x64C19051, 0xD669C94E, 0xE87035F2, 0x9D3A5909,
    0x6F4E7102, 0xDCA946CE, 0x8416881B, 0xBAB097A5, 0x249125C6, 0xB34C0872,
];

const KEY_2: [u32; 36] = [
    0xCCFDA932, 0x51C06F76, 0x046DCCCF, 0x49E1821E, 0x7D3B024C, 0x9DDA5865,
    0xCC8C9825, 0xD1E97DB5, 0x6874D8CB, 0x3471C987, 0x72EDB3FC, 0x81C8365D,
    0xE161E33A, 0xFC92DB59, 0x2009B1EC, 0xB1A94CE4, 0x2F03696B, 0x87E236D8,
    0x3B2B8CE9, 0x0305E784, 0xF9710883, 0xB039DB39, 0x893BEA37, 0xE74D6805,
    0x2A5C38BD, 0xB08DC813, 0x15B32375, 0x46BE4525, 0x0103FD90, 0xA90E87A2,
    0x52ABA66A, 0x85BF7B80, 0x45E8CE63, 0x4DD716D3, 0xF5E30D2D, 0xAF3AE456,
];

const KEY_3: [u32; 36] = [
    0xA6C8F5CA, 0x6D67C080, 0x924F4D3A, 0x047CA06A, 0x08640297, 0x4FD4A758,
    0xBD685A87, 0x9B2701C2, 0x83B62A35, 0x726B533C, 0xE522FA0C, 0xC24B06B4,
    0x459D1CAC, 0xA8C5417B, 0x4FEA62A2, 0x0615D742, 0x30628D09, 0xC44FAB14,
    0x69FF715E, 0xD2D8837D, 0xBEED0B8B, 0x1E6E57AE, 0x61E8C402, 0xBE367A06,
    0x543F2B5E, 0xDB3EC058, 0xBE852075, 0x1E7E4DCC, 0x1564EA55, 0xEC7825B4,
    0xC0538CAD, 0x70F72C7F, 0x49E8C3D0, 0xEDA97EC5, 0xF492B0A4, 0xE05EB02A,
];

const KEY_44: [u32; 36] = [
    0xEF80E005, 0x3A54689F, 0x43C99CCD, 0x1B7727BE, 0x5CB80038, 0xDD2EFE62,
    0xF369F92C, 0x160F94C5, 0x29560019, 0xBF3C10C5, 0xF2CE5566, 0xCEA2C626,
    0xB601816F, 0x64E7481E, 0x0C34DEBD, 0x98F29CB0, 0x3FC504D7, 0xC8FB39F0,
    0x0221B3D8, 0x63F936A2, 0x9A3A4800, 0x6ECC32E3, 0x8E120CFD, 0xB0361623,
    0xAEE1E689, 0x745502EB, 0xE4A6C61C, 0x74F23EB4, 0xD7FA5813, 0xB01916EB,
    0x12328457, 0xD2BC97D2, 0x646425D8, 0x328380A5, 0x43DA8AB1, 0x4B122AC9,
];

const KEY_20: [u32; 36] = [
    0x33B50800, 0xF32F5FCD, 0x3C14881F, 0x6E8A2A95, 0x29FEEFD5, 0x1394EAE3,
    0xBD6BD443, 0x0821C083, 0xFAB379D3, 0xE613E165, 0xF5A754D3, 0x108B2952,
    0x0A4B1E15, 0x61EADEBA, 0x557565DF, 0x3B465301, 0xAE54ECC3, 0x61423309,
    0x70C9FF19, 0x5B0AE5EC, 0x989DF126, 0x9D987A5F, 0x55BC750E, 0xC66EBA27,
    0x2DE988E8, 0xF76600DA, 0x0382DCCB, 0x5569F5F2, 0x8E431262, 0x288FE3D3,
    0x656F2187, 0x37D12E9C, 0x2F539EB4, 0xA492998E, 0xED3958F7, 0x39E96523,
];

const KEY_3A: [u32; 36] = [
    0x67877069, 0x3ABD5617, 0xC23AB1DC, 0xAB57507D, 0x066A7F40, 0x24DEF9B9,
    0x06F759E4, 0xDCF524B1, 0x13793E5E, 0x0359022D, 0xAAE7E1A2, 0x76B9B2FA,
    0x9A160340, 0x87822FBA, 0x19E28FBB, 0x9E338A02, 0xD8007E9A, 0xEA317AF1,
    0x630671DE, 0x0B67CA7C, 0x865192AF, 0xEA3C3526, 0x2B448C8E, 0x8B599254,
    0x4602E9CB, 0x4DE16CDA, 0xE164D5BB, 0x07ECD88E, 0x99FFE5F8, 0x768800C1,
    0x53B091ED, 0x84047434, 0xB426DBBC, 0x36F948BB, 0x46142158, 0x749BB492,
];

const KEY_INDEXDAT1XX: [u32; 36] = [
    0x76CB00AF, 0x111CE62F, 0xB7B27E36, 0x6D8DE8F9, 0xD54BF16A, 0xD9E90373,
    0x7599D982, 0x51F82B0E, 0x636103AD, 0x8E40BC35, 0x2F332C94, 0xF513AAE9,
    0xD22AFEE9, 0x04343987, 0xFC5BB80C, 0x12349D89, 0x14A481BB, 0x25ED3AE8,
    0x7D500E4F, 0x43D1B757, 0x7B59FDAD, 0x4CFBBF34, 0xC3D17436, 0xC1DA21DB,
    0xA34D8C80, 0x962B235D, 0x3E420548, 0x09CF9FFE, 0xD4883F5C, 0xD90E9CB5,
    0x00AEF4E9, 0xF0886DE9, 0x62A58A5B, 0x52A55546, 0x971941B5, 0xF5B79FAC,
];

const KEY_EBOOT1XX: [u32; 36] = [
    0x18CB69EF, 0x158E8912, 0xDEF90EBB, 0x4CB0FB23, 0x3687EE18, 0x868D4A6E,
    0x19B5C756, 0xEE16551D, 0xE7CB2D6C, 0x9747C660, 0xCE95143F, 0x2956F477,
    0x03824ADE, 0x210C9DF1, 0x5029EB24, 0x81DFE69F, 0x39C89B00, 0xB00C8B91,
    0xEF2DF9C2, 0xE13A93FC, 0x8B94A4A8, 0x491DD09D, 0x686A400D, 0xCED4C7E4,
    0x96C8B7C9, 0x1EAADC28, 0xA4170B84, 0x505D5DDC, 0x5DA6C3CF, 0x0E5DFA2D,
    0x6E7919B5, 0xCE5E29C7, 0xAAACDB94, 0x45F70CDD, 0x62A73725, 0xCCE6563D,
];

const KEY_EBOOT2XX: [u32; 36] = [
    0xDA8E36FA, 0x5DD97447, 0x76C19874, 0x97E57EAF, 0x1CAB09BD, 0x9835BAC6,
    0x03D39281, 0x03B205CF, 0x2882E734, 0xE714F663, 0xB96E2775, 0xBD8AAFC7,
    0x1DD3EC29, 0xECA4A16C, 0x5F69EC87, 0x85981E92, 0x7CFCAE21, 0xBAE9DD16,
    0xE6A97804, 0x2EEE02FC, 0x61DF8A3D, 0xDD310564, 0x9697E149, 0xC2453F3B,
    0xF91D8456, 0x39DA6BC8, 0xB3E5FEF5, 0x89C593A3, 0xFB5C8ABC, 0x6C0B7212,
    0xE10DD3CB, 0x98D0B2A8, 0x5FD61847, 0xF0DC2357, 0x7701166A, 0x0F5C3B68,
];

const KEY_UPDATER: [u32; 36] = [
    0xA5603CBF, 0xD7482441, 0xF65764CC, 0x1F90060B, 0x4EA73E45, 0xE551D192,
    0xE7B75D8A, 0x465A506E, 0x40FB1022, 0x2C273350, 0x8096DA44, 0x9947198E,
    0x278DEE77, 0x745D062E, 0xC148FA45, 0x832582AF, 0x5FDB86DA, 0xCB15C4CE,
    0x2524C62F, 0x6C2EC3B1, 0x369BE39E, 0xF7EB1FC4, 0x1E51CE1A, 0xD70536F4,
    0xC34D39D8, 0x7418FB13, 0xE3C84DE1, 0xB118F03C, 0xA2018D4E, 0xE6D8770D,
    0x5720F390, 0x17F96341, 0x60A4A68F, 0x1327DD28, 0x05944C64, 0x0C2C4C12,
];

const KEY_DEMOS27X: [u32; 36] = [
    0x1ABF102F, 0xD596D071, 0x6FC552B2, 0xD4F2531F, 0xF025CDD9, 0xAF9AAF03,
    0xE0CF57CF, 0x255494C4, 0x7003675E, 0x907BC884, 0x002D4EE4, 0x0B687A0D,
    0x9E3AA44F, 0xF58FDA81, 0xEC26AC8C, 0x3AC9B49D, 0x3471C037, 0xB0F3834D,
    0x10DC4411, 0xA232EA31, 0xE2E5FA6B, 0x45594B03, 0xE43A1C87, 0x31DAD9D1,
    0x08CD7003, 0xFA9C2FDF, 0x5A891D25, 0x9B5C1934, 0x22F366E5, 0x5F084A32,
    0x695516D5, 0x2245BE9F, 0x4F6DD705, 0xC4B8B8A1, 0xBC13A600, 0x77B7FC3B,
];

const KEY_MEIMG250: [u32; 36] = [
    0xA381FEBC, 0x99B9D5C9, 0x6C560A8D, 0x30309F95, 0x792646CC, 0x82B64E5E,
    0x1A3951AD, 0x0A182EC4, 0xC46131B4, 0x77C50C8A, 0x325F16C6, 0x02D1942E,
    0x0AA38AC4, 0x2A940AC6, 0x67034726, 0xE52DB133, 0xD2EF2107, 0x85C81E90,
    0xC8D164BA, 0xC38DCE1D, 0x948BA275, 0x0DB84603, 0xE2473637, 0xCD74FCDA,
    0x588E3D66, 0x6D28E822, 0x891E548B, 0xF53CF56D, 0x0BBDDB66, 0xC4B286AA,
    0x2BEBBC4B, 0xFC261FF4, 0x92B8E705, 0xDCEE6952, 0x5E0442E5, 0x8BEB7F21,
];

const KEY_MEIMG260: [u32; 36] = [
    0x11BFD698, 0xD7F9B324, 0xDD524927, 0x16215B86, 0x504AC36D, 0x5843B217,
    0xE5A0DA47, 0xBB73A1E7, 0x2915DB35, 0x375CFD3A, 0xBB70A905, 0x272BEFCA,
    0x2E960791, 0xEA0799BB, 0xB85AE6C8, 0xC9CAF773, 0x250EE641, 0x06E74A9E,
    0x5244895D, 0x466755A5, 0x9A84AF53, 0xE1024174, 0xEEBA031E, 0xED80B9CE,
    0xBC315F72, 0x5821067F, 0xE8313058, 0xD2D0E706, 0xE6D8933E, 0xD7D17FB4,
    0x505096C4, 0xFDA50B3B, 0x4635AE3D, 0xEB489C8A, 0x422D762D, 0x5A8B3231,
];

const KEY_UNK1: [u32; 36] = [
    0x33B50800, 0xF32F5FCD, 0x3C14881F, 0x6E8A2A95, 0x29FEEFD5, 0x1394EAE3,
    0xBD6BD443, 0x0821C083, 0xFAB379D3, 0xE613E165, 0xF5A754D3, 0x108B2952,
    0x0A4B1E15, 0x61EADEBA, 0x557565DF, 0x3B465301, 0xAE54ECC3, 0x61423309,
    0x70C9FF19, 0x5B0AE5EC, 0x989DF126, 0x9D987A5F, 0x55BC750E, 0xC66EBA27,
    0x2DE988E8, 0xF76600DA, 0x0382DCCB, 0x5569F5F2, 0x8E431262, 0x288FE3D3,
    0x656F2187, 0x37D12E9C, 0x2F539EB4, 0xA492998E, 0xED3958F7, 0x39E96523,
];

const KEY_GAMESHARE1XX: [u32; 36] = [
    0x721B53E8, 0xFC3E31C6, 0xF85BA2A2, 0x3CF0AC72, 0x54EEA7AB, 0x5959BFCB,
    0x54B8836B, 0xBC431313, 0x989EF2CF, 0xF0CE36B2, 0x98BA4CF8, 0xE971C931,
    0xA0375DC8, 0x08E52FA0, 0xAC0DD426, 0x57E4D601, 0xC56E61C7, 0xEF1AB98A,
    0xD1D9F8F4, 0x5FE9A708, 0x3EF09D07, 0xFA0C1A8C, 0xA91EEA5C, 0x58F482C5,
    0x2C800302, 0x7EE6F6C3, 0xFF6ABBBB, 0x2110D0D0, 0xD3297A88, 0x980012D3,
    0xDC59C87B, 0x7FDC5792, 0xDB3F5DA6, 0xFC23B787, 0x22698ED3, 0xB680E812,
];

const KEY_GAMESHARE2XX: [u32; 36] = [
    0x94A757C7, 0x9FD39833, 0xF8508371, 0x328B0B29, 0x2CBCB9DA, 0x2918B9C6,
    0x944C50BA, 0xF1DCE7D0, 0x640C3966, 0xC90B3D08, 0xF4AD17BA, 0x6CA0F84B,
    0xF7767C67, 0xA4D3A55A, 0x4A085C6A, 0x6BB27071, 0xFA8B38FB, 0x3FDB31B8,
    0x8B7196F2, 0xDB9BED4A, 0x51625B84, 0x4C1481B4, 0xF684F508, 0x30B44770,
    0x93AA8E74, 0x90C579BC, 0x246EC88D, 0x2E051202, 0xC774842E, 0xA185D997,
    0x7A2B3ADD, 0xFE835B6D, 0x508F184D, 0xEB4C4F13, 0x0E1993D3, 0xBA96DFD2,
];

pub static TAGS: &[TagInfo] = &[
    TagInfo::new(0x00000000, &KEY_0, 0x42, 0x00, "kernel 0x00"),
    TagInfo::new(0x02000000, &KEY_2, 0x45, 0x00, "kernel 0x02"),
    TagInfo::new(0x03000000, &KEY_3, 0x46, 0x00, "kernel 0x03"),
    TagInfo::new(0x4467415D, &KEY_44, 0x59, 0x59, "module 4467415D"),
    TagInfo::new(0x207BBF2F, &KEY_20, 0x5A, 0x5A, "module 207BBF2F"),
    TagInfo::new(0x3ACE4DCE, &KEY_3A, 0x5B, 0x5B, "module 3ACE4DCE"),
    TagInfo::new(0x07000000, &KEY_INDEXDAT1XX, 0x4A, 0x00, "index.dat 1.xx"),
    TagInfo::new(0x08000000, &KEY_EBOOT1XX, 0x4B, 0x00, "eboot 1.xx"),
    TagInfo::new(0xC0CB167C, &KEY_EBOOT2XX, 0x5D, 0x5D, "eboot 2.xx"),
    TagInfo::new(0x0B000000, &KEY_UPDATER, 0x4E, 0x00, "updater"),
    TagInfo::new(0x0C000000, &KEY_DEMOS27X, 0x4F, 0x00, "demo 2.7x"),
    TagInfo::new(0x0F000000, &KEY_MEIMG250, 0x52, 0x00, "me image 2.50"),
    TagInfo::new(0x862648D1, &KEY_MEIMG260, 0x52, 0x52, "me image 2.60"),
    TagInfo::new(0x207BBF2F, &KEY_UNK1, 0x5A, 0x5A, "module 207BBF2F (alias)"),
    TagInfo::new(0x09000000, &KEY_GAMESHARE1XX, 0x4C, 0x00, "gameshare 1.xx"),
    TagInfo::new(0xBB67C59F, &KEY_GAMESHARE2XX, 0x5E, 0x5E, "gameshare 2.xx"),
];
