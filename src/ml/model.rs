//! One classifier configuration.

use std::ffi::CString;

use libc::{c_double, c_int};

use super::module::MlModule;
use crate::data::matrix::{to_c_int, used_len};
use crate::data::model_params::BrainFlowModelParams;
use crate::error::{check, BrainFlowError, Result};

/// A classifier identified by its serialized [`BrainFlowModelParams`].
///
/// Like board sessions, prepared models live in the native library; two
/// `MlModel`s with equal params address the same classifier.
#[derive(Debug, Clone)]
pub struct MlModel {
    module: MlModule,
    params: BrainFlowModelParams,
    params_json: CString,
}

impl MlModel {
    /// Model using the shared MLModule library.
    pub fn new(params: BrainFlowModelParams) -> Result<Self> {
        Self::with_module(MlModule::get()?, params)
    }

    pub fn with_module(module: MlModule, params: BrainFlowModelParams) -> Result<Self> {
        let params_json = CString::new(params.to_json()?)?;
        Ok(Self {
            module,
            params,
            params_json,
        })
    }

    pub fn params(&self) -> &BrainFlowModelParams {
        &self.params
    }

    pub fn prepare(&self) -> Result<()> {
        // SAFETY: `params_json` outlives the call.
        let code = unsafe { (self.module.api().prepare)(self.params_json.as_ptr()) };
        check(code, "prepare")?;
        log::info!(
            "prepared classifier {} for metric {}",
            self.params.classifier,
            self.params.metric
        );
        Ok(())
    }

    /// Run the classifier on a feature vector.
    ///
    /// The output holds at most `max_array_size` values.
    pub fn predict(&self, data: &[f64]) -> Result<Vec<f64>> {
        let capacity = usize::try_from(self.params.max_array_size).map_err(|_| {
            BrainFlowError::invalid_argument(format!(
                "max_array_size {} is negative",
                self.params.max_array_size
            ))
        })?;
        let mut output = vec![0.0; capacity];
        let mut output_len: c_int = 0;
        // SAFETY: input is only read; output has max_array_size values, the
        // size the native side is told through the params.
        let code = unsafe {
            (self.module.api().predict)(
                data.as_ptr() as *mut c_double,
                to_c_int(data.len(), "data length")?,
                output.as_mut_ptr(),
                &mut output_len,
                self.params_json.as_ptr(),
            )
        };
        check(code, "predict")?;
        output.truncate(used_len(output_len, capacity));
        Ok(output)
    }

    pub fn release(&self) -> Result<()> {
        // SAFETY: `params_json` outlives the call.
        let code = unsafe { (self.module.api().release)(self.params_json.as_ptr()) };
        check(code, "release")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BrainFlowClassifier, BrainFlowExitCode, BrainFlowMetric};
    use crate::ml::module::tests::module_with;
    use crate::test_support::read_str;
    use libc::c_char;
    use std::sync::Mutex;

    static PREPARED: Mutex<Vec<String>> = Mutex::new(Vec::new());

    unsafe extern "C" fn prepare(json: *const c_char) -> c_int {
        PREPARED.lock().unwrap().push(read_str(json));
        0
    }

    /// Writes the mean of the input once, or `other_info` times when it
    /// parses as a count.
    unsafe extern "C" fn predict(
        data: *mut c_double,
        len: c_int,
        output: *mut c_double,
        output_len: *mut c_int,
        json: *const c_char,
    ) -> c_int {
        let params = match BrainFlowModelParams::from_json(&read_str(json)) {
            Ok(params) => params,
            Err(_) => return BrainFlowExitCode::JsonNotFoundError as c_int,
        };
        let values = std::slice::from_raw_parts(data, len as usize);
        let mean = values.iter().sum::<f64>() / values.len().max(1) as f64;
        let count = params.other_info.parse::<usize>().unwrap_or(1);
        if count > params.max_array_size as usize {
            return BrainFlowExitCode::InvalidBufferSizeError as c_int;
        }
        for i in 0..count {
            *output.add(i) = mean;
        }
        *output_len = count as c_int;
        0
    }

    unsafe extern "C" fn release(_: *const c_char) -> c_int {
        BrainFlowExitCode::ClassifierIsNotPreparedError as c_int
    }

    fn onnx_params() -> BrainFlowModelParams {
        BrainFlowModelParams::new(BrainFlowMetric::UserDefined, BrainFlowClassifier::OnnxClassifier)
    }

    fn classifier(params: BrainFlowModelParams) -> MlModel {
        let module = module_with(|api| {
            api.prepare = prepare;
            api.predict = predict;
            api.release = release;
        });
        MlModel::with_module(module, params).unwrap()
    }

    #[test]
    fn test_prepare_passes_params() {
        let params = BrainFlowModelParams::new(
            BrainFlowMetric::Mindfulness,
            BrainFlowClassifier::DefaultClassifier,
        )
        .with_file("mindfulness.onnx");
        let model = classifier(params.clone());
        model.prepare().unwrap();

        let prepared = PREPARED.lock().unwrap();
        let sent = prepared
            .iter()
            .map(|json| BrainFlowModelParams::from_json(json).unwrap())
            .find(|p| p.file == "mindfulness.onnx")
            .unwrap();
        assert_eq!(sent, params);
        assert_eq!(model.params(), &params);
    }

    #[test]
    fn test_predict_truncates_output() {
        let model = classifier(BrainFlowModelParams::new(
            BrainFlowMetric::Restfulness,
            BrainFlowClassifier::DefaultClassifier,
        ));
        assert_eq!(model.predict(&[1.0, 2.0, 3.0, 6.0]).unwrap(), vec![3.0]);

        let model = classifier(onnx_params().with_other_info("3"));
        assert_eq!(model.predict(&[2.0, 4.0]).unwrap(), vec![3.0; 3]);
    }

    #[test]
    fn test_predict_output_too_small() {
        let model = classifier(onnx_params().with_other_info("10").with_max_array_size(4));
        let err = model.predict(&[1.0]).unwrap_err();
        assert_eq!(err.kind(), Some(BrainFlowExitCode::InvalidBufferSizeError));
    }

    #[test]
    fn test_negative_max_array_size() {
        let model = classifier(onnx_params().with_max_array_size(-1));
        assert_eq!(model.predict(&[1.0]).unwrap_err().exit_code(), 13);
    }

    #[test]
    fn test_release_not_prepared() {
        let model = classifier(BrainFlowModelParams::new(
            BrainFlowMetric::Mindfulness,
            BrainFlowClassifier::DefaultClassifier,
        ));
        let err = model.release().unwrap_err();
        assert_eq!(err.kind(), Some(BrainFlowExitCode::ClassifierIsNotPreparedError));
        assert!(err.to_string().starts_with("release: CLASSIFIER_IS_NOT_PREPARED_ERROR"));
    }
}
