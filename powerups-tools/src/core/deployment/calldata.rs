// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Creation code for a deployment: bytecode followed by ABI-encoded constructor arguments.

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::Constructor,
    primitives::Bytes,
};

use super::DeploymentError::{self, InvalidConstructor, MissingConstructorArg, NoBytecode};
use crate::core::artifact::Artifact;

/// Build the creation code for `artifact` with the given constructor arguments.
pub fn deploy_code(artifact: &Artifact, args: &[Option<String>]) -> Result<Bytes, DeploymentError> {
    if artifact.bytecode.is_empty() {
        return Err(NoBytecode(artifact.contract_name.clone()));
    }

    let mut code = artifact.bytecode.to_vec();
    match artifact.constructor() {
        Some(constructor) => code.extend(encode_constructor_args(constructor, args)?),
        None if args.is_empty() => {}
        None => {
            return Err(InvalidConstructor(format!(
                "{} has no constructor but {} arguments were given",
                artifact.contract_name,
                args.len(),
            )))
        }
    }
    Ok(code.into())
}

/// ABI-encode string arguments according to the constructor's parameter types.
pub fn encode_constructor_args(
    constructor: &Constructor,
    args: &[Option<String>],
) -> Result<Vec<u8>, DeploymentError> {
    if args.len() != constructor.inputs.len() {
        let want: Vec<_> = constructor.inputs.iter().map(|p| p.ty.as_str()).collect();
        return Err(InvalidConstructor(format!(
            "mismatch number of constructor arguments (want {:?} ({}); got {})",
            want,
            want.len(),
            args.len(),
        )));
    }

    let mut values = Vec::<DynSolValue>::with_capacity(args.len());
    for (index, (arg, param)) in args.iter().zip(constructor.inputs.iter()).enumerate() {
        let Some(arg) = arg else {
            return Err(MissingConstructorArg {
                index,
                name: param.name.clone(),
            });
        };
        let ty = param
            .resolve()
            .map_err(|err| InvalidConstructor(format!("could not resolve {param}: {err}")))?;
        let value = ty
            .coerce_str(arg)
            .map_err(|err| InvalidConstructor(format!("could not parse {param}: {err}")))?;
        values.push(value);
    }

    constructor
        .abi_encode_input_raw(&values)
        .map_err(|err| InvalidConstructor(err.to_string()))
}
