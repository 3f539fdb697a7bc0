mod qr;

pub use qr::{Module, QR};

use std::ops::Deref;

use crate::common::{
    codec::{encode, encode_with_version},
    ec::ecc_per_block,
    error::{SymbolError, SymbolResult},
    macros::report,
    mask::{apply_best_mask, MaskPattern},
    metadata::{ECLevel, Version},
    BitStream,
};

/// Configures and builds a QR symbol from a byte payload.
///
/// Version and mask default to automatic selection, the error correction
/// level to [`ECLevel::M`].
pub struct QRBuilder<'a> {
    data: &'a [u8],
    version: Option<Version>,
    ec_level: ECLevel,
    mask: Option<MaskPattern>,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, version: None, ec_level: ECLevel::M, mask: None }
    }

    pub fn data(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = data;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = Some(mask);
        self
    }

    pub fn unset_mask(&mut self) -> &mut Self {
        self.mask = None;
        self
    }

    pub fn metadata(&self) -> String {
        let version = self.version.map_or("None".to_string(), |v| v.to_string());
        let mask = self.mask.map_or("None".to_string(), |m| (*m).to_string());
        format!("{{ Version: {version}, Ec level: {:?}, Mask: {mask} }}", self.ec_level)
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> SymbolResult<QR> {
        report!("\nGenerating QR {}...", self.metadata());
        if self.data.is_empty() {
            return Err(SymbolError::Validation("QR data must not be empty".to_string()));
        }

        // Encode data in the narrowest single mode
        report!("Encoding data...");
        let (encoded_data, version) = match self.version {
            Some(v) => (encode_with_version(self.data, self.ec_level, v)?, v),
            None => {
                report!("Finding best version...");
                encode(self.data, self.ec_level)?
            }
        };

        report!("Constructing payload with ecc & interleaving...");
        let payload = Self::build_payload(encoded_data.data(), version, self.ec_level);

        report!("Constructing QR...");
        let mut qr = QR::new(version, self.ec_level);

        report!("Drawing functional patterns...");
        qr.draw_all_function_patterns();

        report!("Drawing encoding region...");
        qr.draw_encoding_region(payload)?;

        let mask = match self.mask {
            Some(m) => {
                report!("Apply mask {}...", *m);
                qr.apply_mask(m);
                m
            }
            None => {
                report!("Finding & applying best mask...");
                apply_best_mask(&mut qr)
            }
        };

        let total_modules = version.width() * version.width();
        let dark_modules = qr.count_dark_modules();
        report!("QR generated successfully!");
        report!("Report:");
        report!("{}", qr.metadata());
        report!(
            "Data capacity: {}, Encoded size: {}, Mask: {}",
            version.data_codewords(self.ec_level),
            encoded_data.len() >> 3,
            *mask
        );
        report!(
            "Dark Cells: {}, Light Cells: {}, Balance: {}\n",
            dark_modules,
            total_modules - dark_modules,
            dark_modules * 100 / total_modules
        );

        Ok(qr)
    }

    // Data codewords interleaved, then ecc codewords interleaved, then remainder bits.
    // Its length equals the unset modules left after function patterns
    pub(crate) fn build_payload(data: &[u8], version: Version, ec_level: ECLevel) -> BitStream {
        let (data_blocks, ecc_blocks) = Self::compute_ecc(data, version, ec_level);

        let mut payload = BitStream::new(version.raw_data_modules());
        payload.extend(&Self::interleave(&data_blocks));
        payload.extend(&Self::interleave(&ecc_blocks));
        payload.push_bits(0_u8, version.remainder_bits());
        payload
    }

    // ECC: Error Correction Codeword generator
    fn compute_ecc(data: &[u8], version: Version, ec_level: ECLevel) -> (Vec<&[u8]>, Vec<Vec<u8>>) {
        let data_blocks = Self::blockify(data, version, ec_level);

        let ecc_size_per_block = version.ecc_per_block(ec_level);
        let ecc_blocks =
            data_blocks.iter().map(|b| ecc_per_block(b, ecc_size_per_block)).collect::<Vec<_>>();

        (data_blocks, ecc_blocks)
    }

    pub(crate) fn blockify(data: &[u8], version: Version, ec_level: ECLevel) -> Vec<&[u8]> {
        let (block1_size, block1_count, block2_size, block2_count) =
            version.data_codewords_per_block(ec_level);

        let total_blocks = block1_count + block2_count;
        let total_block1_size = block1_size * block1_count;
        let total_size = total_block1_size + block2_size * block2_count;

        debug_assert!(
            total_size == data.len(),
            "Data len doesn't match total size of blocks: Data len {}, Total block size {}",
            data.len(),
            total_size
        );

        let mut data_blocks = Vec::with_capacity(total_blocks);
        data_blocks.extend(data[..total_block1_size].chunks(block1_size));
        if block2_size > 0 {
            data_blocks.extend(data[total_block1_size..].chunks(block2_size));
        }
        data_blocks
    }

    pub fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
        let max_block_size = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
        let total_size = blocks.iter().map(|b| b.len()).sum::<usize>();
        let mut res = Vec::with_capacity(total_size);
        for i in 0..max_block_size {
            for b in blocks {
                if i < b.len() {
                    res.push(b[i]);
                }
            }
        }
        res
    }
}
