use alloy::primitives::{Address, Bytes, B256, U256};
use safe_multisig::{OwnerChange, SafeVersion, SignatureRecord};
use serde::Serialize;

#[derive(Serialize)]
pub struct HashOutput {
    pub safe: Address,
    pub chain_id: u64,
    pub version: SafeVersion,
    pub domain_separator: B256,
    pub struct_hash: B256,
    pub safe_tx_hash: B256,
}

impl HashOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("Safe: {} (v{}, chain {})", self.safe, self.version, self.chain_id);
            println!("Domain Separator: {}", self.domain_separator);
            println!("Struct Hash: {}", self.struct_hash);
            println!("Safe Tx Hash: {}", self.safe_tx_hash);
        }
    }
}

#[derive(Serialize)]
pub struct EncodeOutput {
    pub to: Address,
    pub signature: &'static str,
    pub call: OwnerChange,
    pub data: Bytes,
}

impl EncodeOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("To: {}", self.to);
            println!("Function: {}", self.signature);
            println!("Data: {}", self.data);
        }
    }
}

#[derive(Serialize)]
pub struct SignaturesOutput {
    pub hash: B256,
    pub signatures: Vec<SignatureRecord>,
}

impl SignaturesOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("Signatures ({}):", self.signatures.len());
            for (i, record) in self.signatures.iter().enumerate() {
                let v = record.v().map_or_else(|| "?".to_string(), |v| v.to_string());
                println!("  {}. {:?} (v={})", i + 1, record.scheme, v);
                println!("     Signer: {}", record.signer);
                if let Some(payload) = &record.contract_payload {
                    println!("     Contract Payload: {} bytes", payload.len());
                }
            }
        }
    }
}

#[derive(Serialize)]
pub struct VerifyOutput {
    pub safe: Address,
    pub safe_tx_hash: B256,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub confirmations: usize,
    pub threshold: u64,
    pub executable: bool,
}

impl VerifyOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("Safe: {}", self.safe);
            println!("Safe Tx Hash: {}", self.safe_tx_hash);
            if self.valid {
                println!("Verdict: valid");
            } else if let Some(reason) = &self.reason {
                println!("Verdict: invalid ({})", reason);
            }
            println!("Confirmations: {}/{}", self.confirmations, self.threshold);
            println!("Executable: {}", self.executable);
        }
    }
}

#[derive(Serialize)]
pub struct OwnersOutput {
    pub address: Address,
    pub chain_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<SafeVersion>,
    pub singleton: Address,
    pub nonce: U256,
    pub threshold: u64,
    pub owners: Vec<Address>,
}

impl OwnersOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("Safe: {}", self.address);
            match self.version {
                Some(version) => println!("Version: {} ({})", version, self.singleton),
                None => println!("Version: unknown ({})", self.singleton),
            }
            println!("Nonce: {}", self.nonce);
            println!("Threshold: {}", self.threshold);
            println!("Owners:");
            for (i, owner) in self.owners.iter().enumerate() {
                println!("  {}: {}", i + 1, owner);
            }
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignOutput {
    pub signer: Address,
    pub safe_tx_hash: B256,
    pub signed_safe_tx_hash: Bytes,
}

impl SignOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("Signer: {}", self.signer);
            println!("Safe Tx Hash: {}", self.safe_tx_hash);
            println!("Signature: {}", self.signed_safe_tx_hash);
        }
    }
}

pub fn confirm_prompt(message: &str) -> bool {
    use dialoguer::Confirm;

    Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .unwrap_or(false)
}
