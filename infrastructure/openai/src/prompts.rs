use business::domain::receipt::model::ExtractionMode;

const OUTPUT_RULES: &str = r#"Follow these rules strictly:
- Output ONLY valid JSON. Do not include any conversational filler, preamble, or markdown code blocks.
- Ensure all prices, quantities, and totals are numbers (float/integer), not strings.
- If a value is missing or unreadable, set its value to null.
- Standardize item names by removing extraneous characters while preserving the original language. Do not translate them."#;

const SINGLE_PERSONA: &str = "You are a highly accurate OCR and data extraction assistant specialized in receipt processing. \
Your goal is to extract key information from a receipt image and convert it into a valid JSON format.";

const MULTI_PERSONA: &str = "You are a highly accurate OCR and data extraction assistant specialized in receipt processing. \
You will receive several images that are consecutive segments of ONE long receipt, photographed top to bottom. \
Your goal is to merge them into a single receipt and convert it into a valid JSON format.";

const SCHEMA: &str = r#"{
  "merchant": {"name": "string or null", "address": "string or null", "phone": "string or null"},
  "transaction": {"date": "YYYY-MM-DD", "time": "HH:mm", "receipt_number": "string or null"},
  "items": [
    {"name": "string", "quantity": number, "price_per_unit": number, "total_price": number}
  ],
  "totals": {"subtotal": number, "tax": number, "total": number, "currency": "string"},
  "payment_method": "string"
}"#;

const ROW_CHECK: &str = "Special Instruction: Please perform a row-by-row cross-check. Ensure that the price on the right strictly \
belongs to the item name on the same horizontal line. If an item name spans multiple lines, make sure to \
capture the correct total price associated with it.";

const MULTI_INSTRUCTIONS: &str = r#"Multi-image instructions:
- The images are given in order. Read them as one continuous receipt.
- Consecutive images may overlap. If the same line item appears at the bottom of one image and the top of the next, include it only once.
- A row cut by the edge of an image continues in the next image: join the item name from one image with the price found on the continuing line of the next.
- Merchant details usually appear in the first image and totals and payment method in the last. Combine them into the single object above."#;

/// System message for the given mode: persona plus output rules.
pub fn system_prompt(mode: ExtractionMode) -> String {
    let persona = match mode {
        ExtractionMode::Single => SINGLE_PERSONA,
        ExtractionMode::Multi => MULTI_PERSONA,
    };
    format!("{}\n{}", persona, OUTPUT_RULES)
}

/// Task text sent ahead of the image blocks in the user message.
pub fn user_prompt(mode: ExtractionMode) -> String {
    match mode {
        ExtractionMode::Single => format!(
            "Please analyze this receipt image and extract the data into the following JSON schema:\n\n{}\n\n\
             Ensure the output is a single, flat JSON object.\n{}",
            SCHEMA, ROW_CHECK
        ),
        ExtractionMode::Multi => format!(
            "Please analyze these receipt images and extract the data into the following JSON schema:\n\n{}\n\n\
             Ensure the output is a single, flat JSON object covering the whole receipt.\n{}\n\n{}",
            SCHEMA, ROW_CHECK, MULTI_INSTRUCTIONS
        ),
    }
}
