//! Server-rendered HTML for the calculator page.

use tax_core::RetirementTaxBreakdown;

use crate::form::{CalcTaxForm, FormField};
use crate::utils::{escape_html, format_tax, format_yen};

/// Everything the calculator page shows.
#[derive(Debug, Clone, Default)]
pub struct CalculatorPage {
    pub form: CalcTaxForm,
    pub errors: Vec<(FormField, &'static str)>,
    pub result: Option<RetirementTaxBreakdown>,
}

impl CalculatorPage {
    fn error_for(
        &self,
        field: FormField,
    ) -> String {
        self.errors
            .iter()
            .filter(|(f, _)| *f == field)
            .map(|(_, message)| format!(r#"<p class="error" role="alert">{message}</p>"#))
            .collect()
    }

    fn breakdown_rows(&self) -> String {
        let Some(result) = &self.result else {
            return String::new();
        };

        let rows = [
            ("退職所得控除額", result.deduction),
            ("課税退職所得金額", result.taxable_income),
            ("基準所得税額", result.base_tax),
            ("源泉徴収税額", result.withholding_tax),
        ];

        let body: String = rows
            .iter()
            .map(|(label, amount)| {
                format!("<tr><th>{label}</th><td>{}円</td></tr>", format_yen(*amount))
            })
            .collect();

        format!(r#"<table class="breakdown">{body}</table>"#)
    }

    /// Renders the full HTML document.
    pub fn render(&self) -> String {
        let form = &self.form;
        let checked = |on: bool| if on { " checked" } else { "" };
        let tax = format_tax(self.result.map(|r| r.withholding_tax));

        format!(
            r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<title>退職金の所得税計算アプリケーション</title>
</head>
<body>
<h1>退職金の所得税計算アプリケーション</h1>
<section class="input">
<h3>退職金情報を入力してください</h3>
<form method="post" action="/">
<div>
<label for="yearsOfService">勤続年数</label>
<input id="yearsOfService" name="yearsOfService" type="number" value="{years}">年
<small>１年未満の端数は切り上げ</small>
{years_error}
</div>
<div>
<label for="isDisability">退職基因</label>
<input id="isDisability" name="isDisability" type="checkbox"{disability}>障害者となったことに直接基因して退職した
</div>
<div>
<span>役員等以外か役員等か</span>
<input id="notBoardMember" name="isBoardMember" type="radio" value="0"{not_board}><label for="notBoardMember">役員等以外</label>
<input id="boardMember" name="isBoardMember" type="radio" value="1"{board}><label for="boardMember">役員等</label>
</div>
<div>
<label for="severancePay">退職金</label>
<input id="severancePay" name="severancePay" type="text" inputmode="numeric" value="{severance}">円
{severance_error}
</div>
<button type="submit">所得税を計算する</button>
</form>
</section>
<section class="result">
<h3>退職金にかかる所得税</h3>
<p aria-label="tax">{tax}</p>
{breakdown}
</section>
</body>
</html>
"#,
            years = escape_html(&form.years_of_service),
            years_error = self.error_for(FormField::YearsOfService),
            disability = checked(form.is_disability()),
            not_board = checked(!form.is_board_member()),
            board = checked(form.is_board_member()),
            severance = escape_html(&form.severance_pay),
            severance_error = self.error_for(FormField::SeverancePay),
            tax = tax,
            breakdown = self.breakdown_rows(),
        )
    }
}
