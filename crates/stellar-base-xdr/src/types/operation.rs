//! Operations carried by a transaction.
//!
//! Only the operation kinds needed to build and sign simple transactions are
//! modelled; any other `OperationType` discriminant decodes as
//! [`XdrError::UnknownUnionArm`].

use serde::{Deserialize, Serialize};

use crate::error::{Result, XdrError};
use crate::reader::XdrReader;
use crate::traits::{ReadXdr, WriteXdr};
use crate::writer::XdrWriter;

use super::asset::Asset;
use super::keys::{AccountId, MuxedAccount};
use super::string::StringM;

/// Maximum length of a data entry name and of its value.
pub const MAX_DATA_LEN: u32 = 64;

/// A data entry name: up to 64 bytes, not necessarily UTF-8.
pub type DataName = StringM<MAX_DATA_LEN>;

mod operation_type {
    pub const CREATE_ACCOUNT: i32 = 0;
    pub const PAYMENT: i32 = 1;
    pub const MANAGE_DATA: i32 = 10;
    pub const BUMP_SEQUENCE: i32 = 11;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccountOp {
    pub destination: AccountId,
    pub starting_balance: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOp {
    pub destination: MuxedAccount,
    pub asset: Asset,
    pub amount: i64,
}

/// Set or, with `data_value: None`, delete an account data entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManageDataOp {
    pub data_name: DataName,
    pub data_value: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BumpSequenceOp {
    pub bump_to: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationBody {
    CreateAccount(CreateAccountOp),
    Payment(PaymentOp),
    ManageData(ManageDataOp),
    BumpSequence(BumpSequenceOp),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Overrides the transaction source for this operation.
    pub source_account: Option<MuxedAccount>,
    pub body: OperationBody,
}

impl Operation {
    pub fn new(body: OperationBody) -> Self {
        Self {
            source_account: None,
            body,
        }
    }

    pub fn with_source(mut self, source: MuxedAccount) -> Self {
        self.source_account = Some(source);
        self
    }
}

impl WriteXdr for OperationBody {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        match self {
            Self::CreateAccount(op) => {
                w.write_discriminant(operation_type::CREATE_ACCOUNT);
                op.destination.write_xdr(w)?;
                w.write_i64(op.starting_balance);
            }
            Self::Payment(op) => {
                w.write_discriminant(operation_type::PAYMENT);
                op.destination.write_xdr(w)?;
                op.asset.write_xdr(w)?;
                w.write_i64(op.amount);
            }
            Self::ManageData(op) => {
                w.write_discriminant(operation_type::MANAGE_DATA);
                op.data_name.write_xdr(w)?;
                match &op.data_value {
                    Some(value) => {
                        w.write_bool(true);
                        w.write_var_opaque(value, MAX_DATA_LEN)?;
                    }
                    None => w.write_bool(false),
                }
            }
            Self::BumpSequence(op) => {
                w.write_discriminant(operation_type::BUMP_SEQUENCE);
                w.write_i64(op.bump_to);
            }
        }
        Ok(())
    }
}

impl ReadXdr for OperationBody {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| match r.read_discriminant()? {
            operation_type::CREATE_ACCOUNT => Ok(Self::CreateAccount(CreateAccountOp {
                destination: AccountId::read_xdr(r)?,
                starting_balance: r.read_i64()?,
            })),
            operation_type::PAYMENT => Ok(Self::Payment(PaymentOp {
                destination: MuxedAccount::read_xdr(r)?,
                asset: Asset::read_xdr(r)?,
                amount: r.read_i64()?,
            })),
            operation_type::MANAGE_DATA => {
                let data_name = DataName::read_xdr(r)?;
                let data_value = if r.read_bool()? {
                    Some(r.read_var_opaque(MAX_DATA_LEN)?)
                } else {
                    None
                };
                Ok(Self::ManageData(ManageDataOp {
                    data_name,
                    data_value,
                }))
            }
            operation_type::BUMP_SEQUENCE => Ok(Self::BumpSequence(BumpSequenceOp {
                bump_to: r.read_i64()?,
            })),
            discriminant => Err(XdrError::UnknownUnionArm {
                type_name: "OperationBody",
                discriminant,
            }),
        })
    }
}

impl WriteXdr for Operation {
    fn write_xdr(&self, w: &mut XdrWriter) -> Result<()> {
        w.write_option(self.source_account.as_ref())?;
        self.body.write_xdr(w)
    }
}

impl ReadXdr for Operation {
    fn read_xdr(r: &mut XdrReader<'_>) -> Result<Self> {
        r.atomically(|r| {
            Ok(Self {
                source_account: r.read_option()?,
                body: OperationBody::read_xdr(r)?,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(byte: u8) -> AccountId {
        AccountId::from_ed25519([byte; 32])
    }

    #[test]
    fn test_bump_sequence_layout() {
        let op = Operation::new(OperationBody::BumpSequence(BumpSequenceOp { bump_to: 7 }));
        assert_eq!(
            op.to_xdr().unwrap(),
            vec![0, 0, 0, 0, 0, 0, 0, 11, 0, 0, 0, 0, 0, 0, 0, 7]
        );
    }

    #[test]
    fn test_operations_roundtrip() {
        let ops = vec![
            Operation::new(OperationBody::CreateAccount(CreateAccountOp {
                destination: account(1),
                starting_balance: 100_000_000,
            })),
            Operation::new(OperationBody::Payment(PaymentOp {
                destination: MuxedAccount::MuxedEd25519 {
                    id: 42,
                    ed25519: [2; 32],
                },
                asset: Asset::credit("USDC", account(3)).unwrap(),
                amount: 5,
            }))
            .with_source(account(4).into()),
            Operation::new(OperationBody::ManageData(ManageDataOp {
                data_name: DataName::try_from("config").unwrap(),
                data_value: Some(vec![1, 2, 3]),
            })),
            Operation::new(OperationBody::ManageData(ManageDataOp {
                data_name: DataName::try_from("config").unwrap(),
                data_value: None,
            })),
        ];
        for op in ops {
            let bytes = op.to_xdr().unwrap();
            assert_eq!(bytes.len() % 4, 0);
            assert_eq!(Operation::from_xdr(&bytes).unwrap(), op);
        }
    }

    #[test]
    fn test_manage_data_limits() {
        assert!(matches!(
            DataName::new("n".repeat(65)),
            Err(XdrError::LengthExceedsMax { length: 65, max: 64 })
        ));

        let op = Operation::new(OperationBody::ManageData(ManageDataOp {
            data_name: DataName::try_from("n").unwrap(),
            data_value: Some(vec![0; 65]),
        }));
        assert!(matches!(
            op.to_xdr(),
            Err(XdrError::LengthExceedsMax { length: 65, max: 64 })
        ));
    }

    #[test]
    fn test_manage_data_non_utf8_name_roundtrip() {
        let op = Operation::new(OperationBody::ManageData(ManageDataOp {
            data_name: DataName::new(vec![0xff, 0xfe]).unwrap(),
            data_value: None,
        }));
        let bytes = op.to_xdr().unwrap();
        assert_eq!(
            bytes,
            vec![0, 0, 0, 0, 0, 0, 0, 10, 0, 0, 0, 2, 0xff, 0xfe, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(Operation::from_xdr(&bytes).unwrap(), op);
    }

    #[test]
    fn test_unmodelled_operation_type() {
        // No source account, then PATH_PAYMENT_STRICT_RECEIVE.
        assert!(matches!(
            Operation::from_xdr(&[0, 0, 0, 0, 0, 0, 0, 2]),
            Err(XdrError::UnknownUnionArm {
                type_name: "OperationBody",
                discriminant: 2
            })
        ));
    }
}
