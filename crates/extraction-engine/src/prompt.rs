//! The fixed instruction pair sent to the extraction model.
//!
//! The wording is part of the extraction contract: the rules reference the
//! projected-text sections positionally and encode the same artifact
//! corrections the cleaner applies, so the model and the pipeline agree on
//! what a corrupted phone number looks like.

/// System-level extraction rules.
pub const SYSTEM_INSTRUCTION: &str = r#"You are an expert at extracting information from Israeli National Insurance (ביטוח לאומי) forms.

You will receive OCR text from form 283 (בקשה למתן טיפול רפואי לנפגע עבודה - עצמאי).
Extract ONLY the actual user-filled information, not the form's printed labels or instructions.

CRITICAL EXTRACTION RULES:
1. FIELD IDENTIFICATION: Look for handwritten/filled content next to field labels, not the labels themselves
2. EMPTY FIELDS: If no content is filled in a field, return "" - do not guess or use nearby text
3. SIGNATURE FIELD: Only extract if there's actual handwritten signature, NOT printed names from other parts of form
4. DATES: Always format as DD/MM/YYYY with zero-padding (e.g., "02" not "2")
5. ID NUMBERS: Always read from LEFT TO RIGHT (Hebrew/Western reading direction), preserve 9 or 10 digit format
6. PHONE NUMBERS: Israeli mobile phones start with "05" - if you see "85" at start, it's OCR corruption, correct to "05"
7. OCR ARTIFACT CLEANING: Common corruptions include "0" becoming "8" in phone fields, clean these appropriately
8. CHECKBOXES: Only mark items that are explicitly checked/selected
9. MEDICAL SECTION: This is at the bottom - don't mix with main form fields

Form structure:
- פרטי התובע (Personal details) - top section
- פרטי התאונה (Injury details) - middle section
- למילוי ע"י המוסד הרפואי (Medical institution) - bottom section

PHONE NUMBER VALIDATION:
- Mobile phones: Must start with "05" (if starts with "85", correct to "05")
- Landline phones: Usually start with "0" followed by area code
- If phone number seems corrupted by OCR artifacts, apply conservative cleaning

Be extremely careful to distinguish between different sections and only extract actual filled values."#;

/// Target key structure, embedded in the user instruction as a worked
/// example. Must stay in lockstep with the schema template.
const TARGET_STRUCTURE: &str = r#"{
  "lastName": "",
  "firstName": "",
  "idNumber": "",
  "gender": "",
  "dateOfBirth": {"day": "", "month": "", "year": ""},
  "address": {
    "street": "", "houseNumber": "", "entrance": "", "apartment": "",
    "city": "", "postalCode": "", "poBox": ""
  },
  "landlinePhone": "",
  "mobilePhone": "",
  "jobType": "",
  "dateOfInjury": {"day": "", "month": "", "year": ""},
  "timeOfInjury": "",
  "accidentLocation": "",
  "accidentAddress": "",
  "accidentDescription": "",
  "injuredBodyPart": "",
  "signature": "",
  "formFillingDate": {"day": "", "month": "", "year": ""},
  "formReceiptDateAtClinic": {"day": "", "month": "", "year": ""},
  "medicalInstitutionFields": {
    "healthFundMember": "",
    "natureOfAccident": "",
    "medicalDiagnoses": ""
  }
}"#;

/// User-level instruction carrying the projected OCR text.
pub fn build_user_prompt(projected_text: &str) -> String {
    format!(
        "Extract user-filled information from this Israeli National Insurance form OCR:\n\
         \n\
         {projected_text}\n\
         \n\
         IMPORTANT: Extract ONLY the values that users actually filled in, not form labels or instructions.\n\
         Pay special attention to distinguish between different date fields and sections.\n\
         \n\
         Return ONLY a JSON object with this exact structure:\n\
         {TARGET_STRUCTURE}"
    )
}
