// --- File: crates/wwex_speedfreight/src/models.rs ---
//! SpeedFreight 2 wire structures.

use wwex_common::soap::{
    service_element, write_element, write_optional_element, write_parent, SoapError, WriteXml,
    XmlNode, XmlWriter,
};

use crate::logic::SPEEDFREIGHT_SUCCESS_CODE;

// --- Request ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub class: String,
    pub weight: String,
    pub description: String,
    pub nmfc: Option<String>,
    pub piece_type: String,
    pub pieces: String,
    pub hazmat: String, // "Y" / "N"
}

impl WriteXml for LineItem {
    fn write_xml(&self, writer: &mut XmlWriter) -> Result<(), SoapError> {
        write_parent(writer, "wsLineItem", |w| {
            write_element(w, "lineItemClass", &self.class)?;
            write_element(w, "lineItemWeight", &self.weight)?;
            write_element(w, "lineItemDescription", &self.description)?;
            write_optional_element(w, "lineItemNMFC", self.nmfc.as_deref())?;
            write_element(w, "lineItemPieceType", &self.piece_type)?;
            write_element(w, "piecesOfLineItem", &self.pieces)?;
            write_element(w, "lineItemHazmatInfo", &self.hazmat)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlingUnit {
    pub kind: String,
    pub count: String,
    pub height: String,
    pub length: String,
    pub width: String,
    pub line_items: Vec<LineItem>,
}

impl WriteXml for HandlingUnit {
    fn write_xml(&self, writer: &mut XmlWriter) -> Result<(), SoapError> {
        write_parent(writer, "wsHandlingUnit", |w| {
            write_element(w, "typeOfHandlingUnit", &self.kind)?;
            write_element(w, "numberOfHandlingUnits", &self.count)?;
            write_element(w, "handlingUnitHeight", &self.height)?;
            write_element(w, "handlingUnitLength", &self.length)?;
            write_element(w, "handlingUnitWidth", &self.width)?;
            write_parent(w, "lineItemDetails", |w| {
                self.line_items.iter().try_for_each(|item| item.write_xml(w))
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommodityDetails {
    pub handling_units: Vec<HandlingUnit>,
}

impl WriteXml for CommodityDetails {
    fn write_xml(&self, writer: &mut XmlWriter) -> Result<(), SoapError> {
        write_parent(writer, "commodityDetails", |w| {
            write_parent(w, "handlingUnitDetails", |w| {
                self.handling_units.iter().try_for_each(|unit| unit.write_xml(w))
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreightShipmentQuoteRequest {
    pub sender_city: String,
    pub sender_state: String,
    pub sender_zip: String,
    pub receiver_city: String,
    pub receiver_state: String,
    pub receiver_zip: String,
    pub commodity_details: CommodityDetails,
}

/// Body of the `quoteSpeedFreightShipment` operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSpeedFreightShipment {
    pub request: FreightShipmentQuoteRequest,
}

impl WriteXml for QuoteSpeedFreightShipment {
    fn write_xml(&self, writer: &mut XmlWriter) -> Result<(), SoapError> {
        let request = &self.request;
        write_parent(writer, &service_element("quoteSpeedFreightShipment"), |w| {
            write_parent(w, "freightShipmentQuoteRequest", |w| {
                write_element(w, "senderCity", &request.sender_city)?;
                write_element(w, "senderState", &request.sender_state)?;
                write_element(w, "senderZip", &request.sender_zip)?;
                write_element(w, "receiverCity", &request.receiver_city)?;
                write_element(w, "receiverState", &request.receiver_state)?;
                write_element(w, "receiverZip", &request.receiver_zip)?;
                request.commodity_details.write_xml(w)
            })
        })
    }
}

// --- Response ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreightShipmentQuoteResult {
    pub carrier_scac: String,
    pub carrier_name: Option<String>,
    /// Raw total as sent by the carrier.
    pub total_price: String,
    pub transit_days: Option<String>,
}

impl FreightShipmentQuoteResult {
    fn from_xml(node: &XmlNode) -> Result<Self, SoapError> {
        Ok(Self {
            carrier_scac: node.require_text("carrierSCAC")?.to_string(),
            carrier_name: node.child_text("carrierName").map(str::to_string),
            total_price: node.require_text("totalPrice")?.to_string(),
            transit_days: node.child_text("transitDays").map(str::to_string),
        })
    }
}

/// Content of `quoteSpeedFreightShipmentReturn`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSpeedFreightShipmentReturn {
    pub response_status_code: String,
    pub response_status_description: Option<String>,
    pub results: Vec<FreightShipmentQuoteResult>,
}

impl QuoteSpeedFreightShipmentReturn {
    pub fn from_xml(body: &XmlNode) -> Result<Self, SoapError> {
        let quote = body.find("quoteSpeedFreightShipmentReturn").ok_or_else(|| {
            SoapError::MissingElement("quoteSpeedFreightShipmentReturn".to_string())
        })?;

        let response_status_code = quote.require_text("responseStatusCode")?.to_string();

        // Results of a failed quote are never read; they may be partial.
        let results = match quote.child("freightShipmentQuoteResults") {
            Some(results) if response_status_code == SPEEDFREIGHT_SUCCESS_CODE => results
                .children_named("freightShipmentQuoteResult")
                .map(FreightShipmentQuoteResult::from_xml)
                .collect::<Result<Vec<_>, _>>()?,
            _ => Vec::new(),
        };

        Ok(Self {
            response_status_code,
            response_status_description: quote
                .child_text("responseStatusDescription")
                .map(str::to_string),
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_from_xml() {
        let body = XmlNode::parse(
            r#"<quoteSpeedFreightShipmentResponse>
                 <quoteSpeedFreightShipmentReturn>
                   <responseStatusCode>1</responseStatusCode>
                   <freightShipmentQuoteResults>
                     <freightShipmentQuoteResult>
                       <carrierSCAC>ODFL</carrierSCAC>
                       <carrierName>Old Dominion</carrierName>
                       <totalPrice>245.10</totalPrice>
                       <transitDays>3</transitDays>
                     </freightShipmentQuoteResult>
                     <freightShipmentQuoteResult>
                       <carrierSCAC>RLCA</carrierSCAC>
                       <totalPrice>260.00</totalPrice>
                     </freightShipmentQuoteResult>
                   </freightShipmentQuoteResults>
                 </quoteSpeedFreightShipmentReturn>
               </quoteSpeedFreightShipmentResponse>"#,
        )
        .unwrap();

        let quote = QuoteSpeedFreightShipmentReturn::from_xml(&body).unwrap();
        assert_eq!(quote.response_status_code, "1");
        assert_eq!(quote.results.len(), 2);
        assert_eq!(quote.results[0].transit_days.as_deref(), Some("3"));
        assert_eq!(quote.results[1].carrier_name, None);
        assert_eq!(quote.results[1].total_price, "260.00");
    }

    #[test]
    fn test_failed_quote_ignores_partial_results() {
        let body = XmlNode::parse(
            r#"<quoteSpeedFreightShipmentReturn>
                 <responseStatusCode>0</responseStatusCode>
                 <responseStatusDescription>No carriers available</responseStatusDescription>
                 <freightShipmentQuoteResults>
                   <freightShipmentQuoteResult><carrierSCAC>ODFL</carrierSCAC></freightShipmentQuoteResult>
                 </freightShipmentQuoteResults>
               </quoteSpeedFreightShipmentReturn>"#,
        )
        .unwrap();

        let quote = QuoteSpeedFreightShipmentReturn::from_xml(&body).unwrap();
        assert_eq!(quote.response_status_code, "0");
        assert!(quote.results.is_empty());
    }

    #[test]
    fn test_successful_quote_requires_total_price() {
        let body = XmlNode::parse(
            r#"<quoteSpeedFreightShipmentReturn>
                 <responseStatusCode>1</responseStatusCode>
                 <freightShipmentQuoteResults>
                   <freightShipmentQuoteResult><carrierSCAC>ODFL</carrierSCAC></freightShipmentQuoteResult>
                 </freightShipmentQuoteResults>
               </quoteSpeedFreightShipmentReturn>"#,
        )
        .unwrap();

        let err = QuoteSpeedFreightShipmentReturn::from_xml(&body).unwrap_err();
        assert!(matches!(err, SoapError::MissingElement(name) if name == "totalPrice"));
    }

    #[test]
    fn test_line_item_skips_missing_nmfc() {
        let item = LineItem {
            class: "85".to_string(),
            weight: "80".to_string(),
            description: "Pallet of stuff".to_string(),
            nmfc: None,
            piece_type: "Pallet".to_string(),
            pieces: "1".to_string(),
            hazmat: "N".to_string(),
        };
        let mut writer = XmlWriter::new(Vec::new());
        item.write_xml(&mut writer).unwrap();
        let xml = String::from_utf8(writer.into_inner()).unwrap();

        assert!(xml.starts_with("<wsLineItem><lineItemClass>85</lineItemClass>"));
        assert!(!xml.contains("NMFC"));
        assert!(xml.ends_with("<lineItemHazmatInfo>N</lineItemHazmatInfo></wsLineItem>"));
    }
}
