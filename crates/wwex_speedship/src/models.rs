// --- File: crates/wwex_speedship/src/models.rs ---
//! SpeedShip 2 wire structures.
//!
//! Request types write themselves into a SOAP body; response types are read
//! from the parsed envelope body.

use rust_decimal::Decimal;
use wwex_common::soap::{
    service_element, write_element, write_optional_element, write_parent, SoapError, WriteXml,
    XmlNode, XmlWriter,
};

use crate::logic::SPEEDSHIP_SUCCESS_CODE;

// --- Request ---

/// Optional-service flags of a rate request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateServiceOptions {
    pub rate_type: Option<String>,
    pub saturday_delivery: String,
    pub cod: String,
    pub declared_value: String,
    pub delivery_confirmation: String,
    pub additional_handling: String,
    pub large_package: String,
    pub return_service: String,
    pub billing_option: String,
}

impl WriteXml for RateServiceOptions {
    fn write_xml(&self, writer: &mut XmlWriter) -> Result<(), SoapError> {
        write_parent(writer, "rateServiceOptions", |w| {
            write_optional_element(w, "rateType", self.rate_type.as_deref())?;
            write_element(w, "saturdayDeliveryIndicator", &self.saturday_delivery)?;
            write_element(w, "codIndicator", &self.cod)?;
            write_element(w, "declaredValueIndicator", &self.declared_value)?;
            write_element(w, "deliveryConfirmationIndicator", &self.delivery_confirmation)?;
            write_element(w, "additionalHandlingIndicator", &self.additional_handling)?;
            write_element(w, "largePackageIndicator", &self.large_package)?;
            write_element(w, "returnServiceIndicator", &self.return_service)?;
            write_element(w, "billingOption", &self.billing_option)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleShipmentAddress {
    pub city: String,
    pub country_code: String,
    pub zip_code: String,
    pub residential: String, // "Y" / "N"
    pub state_province: String,
}

impl SimpleShipmentAddress {
    fn write_as(&self, writer: &mut XmlWriter, name: &str) -> Result<(), SoapError> {
        write_parent(writer, name, |w| {
            write_element(w, "city", &self.city)?;
            write_element(w, "countryCode", &self.country_code)?;
            write_element(w, "zipCode", &self.zip_code)?;
            write_element(w, "residentialIndicator", &self.residential)?;
            write_element(w, "stateProvince", &self.state_province)
        })
    }
}

/// One package; dimensions in inches, weight in pounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentPackage {
    pub height: f64,
    pub length: f64,
    pub width: f64,
    pub weight: f64,
    pub sequence: String,
    pub packaging_type: String,
}

/// Decimal places kept for package weights and dimensions on the wire.
pub const PACKAGE_VALUE_PRECISION: u32 = 4;

/// Formats a converted weight or dimension as a plain decimal string,
/// rounded to [`PACKAGE_VALUE_PRECISION`] places with trailing zeros removed.
pub fn format_package_value(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(number) => number
            .round_dp(PACKAGE_VALUE_PRECISION)
            .normalize()
            .to_string(),
        None => value.to_string(),
    }
}

impl WriteXml for ShipmentPackage {
    fn write_xml(&self, writer: &mut XmlWriter) -> Result<(), SoapError> {
        write_parent(writer, "shipmentPackage", |w| {
            write_element(w, "packageHeight", &format_package_value(self.height))?;
            write_element(w, "packageLength", &format_package_value(self.length))?;
            write_element(w, "packageSequence", &self.sequence)?;
            write_element(w, "packagingType", &self.packaging_type)?;
            write_element(w, "packageWeight", &format_package_value(self.weight))?;
            write_element(w, "packageWidth", &format_package_value(self.width))
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpsServiceDetailRequest {
    pub rate_service_options: RateServiceOptions,
    pub sender: SimpleShipmentAddress,
    pub receiver: SimpleShipmentAddress,
    pub packages: Vec<ShipmentPackage>,
}

/// Body of the `getUPSServiceDetails` operation.
#[derive(Debug, Clone, PartialEq)]
pub struct GetUpsServiceDetails {
    pub request: UpsServiceDetailRequest,
}

impl WriteXml for GetUpsServiceDetails {
    fn write_xml(&self, writer: &mut XmlWriter) -> Result<(), SoapError> {
        let request = &self.request;
        write_parent(writer, &service_element("getUPSServiceDetails"), |w| {
            write_parent(w, "upsServiceDetailRequest", |w| {
                request.rate_service_options.write_xml(w)?;
                request.sender.write_as(w, "senderAddress")?;
                request.receiver.write_as(w, "receiverAddress")?;
                write_parent(w, "shipmentPackages", |w| {
                    request
                        .packages
                        .iter()
                        .try_for_each(|package| package.write_xml(w))
                })
            })
        })
    }
}

// --- Response ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse {
    pub response_status_code: String,
    pub response_status_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsServiceDetail {
    pub service_code: String,
    /// Raw grand total as sent by the carrier.
    pub service_fee_grand_total: String,
    /// e.g. "08:30 AM Friday 01/01/21" or "End of Day Friday 01/01/21".
    pub estimate_delivery: Option<String>,
}

impl UpsServiceDetail {
    fn from_xml(node: &XmlNode) -> Result<Self, SoapError> {
        Ok(Self {
            service_code: node.require_text("serviceCode")?.to_string(),
            service_fee_grand_total: node
                .require("serviceFeeDetail")?
                .require_text("serviceFeeGrandTotal")?
                .to_string(),
            estimate_delivery: node.child_text("estimateDelivery").map(str::to_string),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsServiceDetailResponse {
    pub service_response: ServiceResponse,
    pub service_details: Vec<UpsServiceDetail>,
}

impl UpsServiceDetailResponse {
    /// Reads the response from the content of the SOAP body.
    pub fn from_xml(body: &XmlNode) -> Result<Self, SoapError> {
        let response = body
            .find("upsServiceDetailResponse")
            .ok_or_else(|| SoapError::MissingElement("upsServiceDetailResponse".to_string()))?;

        let status = response.require("serviceResponse")?;
        let service_response = ServiceResponse {
            response_status_code: status.require_text("responseStatusCode")?.to_string(),
            response_status_description: status
                .child_text("responseStatusDescription")
                .map(str::to_string),
        };

        // Details of a failed quote are never read; they may be partial.
        let succeeded = service_response.response_status_code == SPEEDSHIP_SUCCESS_CODE;
        let service_details = match response.child("upsServiceDetails") {
            Some(details) if succeeded => details
                .children_named("upsServiceDetail")
                .map(UpsServiceDetail::from_xml)
                .collect::<Result<Vec<_>, _>>()?,
            _ => Vec::new(),
        };

        Ok(Self {
            service_response,
            service_details,
        })
    }
}
